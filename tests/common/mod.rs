#![allow(dead_code)]

use jit_trace_studio::model::{build_model, Model, TraceInputs};

/// `main` (id 1) inlines `add`, which inlines `sq`; `main` calls `helper`
/// through a call descriptor; `helper` (id 2) deopts; `main` is recompiled
/// as id 3.
pub const SOURCE_DUMP: &str = "--- FUNCTION SOURCE (app.js:main) id{1,0} ---
(x){ if (x < 0) return 0; return add(x, 1) + helper(x); }
--- END ---
--- FUNCTION SOURCE (app.js:add) id{1,1} ---
(a, b){ return sq(a) + b; }
--- END ---
INLINE (add) id{1,1} AS 1 AT <0:33>
--- FUNCTION SOURCE (app.js:sq) id{1,2} ---
(v){ return v * v; }
--- END ---
INLINE (sq) id{1,2} AS 2 AT <1:15>
--- FUNCTION SOURCE (app.js:helper) id{2,0} ---
(x){ return x > 1; }
--- END ---
[deoptimizing (DEOPT soft): begin 0x3ac1 Insufficient type feedback]
--- FUNCTION SOURCE (app.js:main) id{3,0} ---
(x){ return x; }
--- END ---
";

pub const IR_LOG: &str = "begin_compilation
  name \"app.js:main\"
  method \"main:1\"
  date 1700000000
end_compilation
begin_cfg
  name \"Z_Code generation\"
      0 0 t40 CallWithDescriptor t3 t12 changes[*] type:Tagged pos:45 <|@
      0 0 t41 Mul t20 t20 changes[*] type:Tagged pos:2_12 <|@
      0 1 t42 Add t40 t41 pos:44 <|@
end_cfg
begin_compilation
  name \"app.js:helper\"
  method \"helper:2\"
  date 1700000001
end_compilation
";

pub const ENGINE_OUTPUT: &str = "Did not inline helper called from main (target not inlineable).
Did not inline main called from main (target is recursive).
Did not inline missing called from main (target text too big).
done
";

/// Rendered body of `main` id 1
pub const MAIN_V1_HTML: &str = concat!(
    r#"<div class="code">(x){ if (x &lt; 0) return 0; return "#,
    r#"<span class="inline toggle-next" data-title="Show inlined">add</span>"#,
    r#"<span class="inline-code hidden"><div class="code">(a, b){ return "#,
    r#"<span class="inline toggle-next" data-title="Show inlined">sq</span>"#,
    r#"<span class="inline-code hidden"><div class="code">(v){ return "#,
    r#"<span class="runtime Mul" data-title="Mul">v</span> * v; }</div>                 </span>"#,
    r#"(a) + b; }</div>                                    </span>(x, 1) + "#,
    r##"<a class="runtime CallWithDescriptor" did-not-inlined data-title="Did not inline: target not inlineable" href="#helper">helper</a>"##,
    r#"(x); }</div>"#
);

pub fn fixture_inputs() -> TraceInputs<'static> {
    TraceInputs {
        source_dump: SOURCE_DUMP,
        ir_log: IR_LOG,
        engine_output: ENGINE_OUTPUT,
    }
}

pub fn fixture_model() -> Model {
    build_model(&fixture_inputs()).unwrap()
}

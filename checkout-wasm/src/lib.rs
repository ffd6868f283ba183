//! WASM bindings for the checkout engine.
//!
//! Thin adapter: every export forwards to `checkout-core` and converts
//! the result into plain JS values. No checkout rule lives here.
//!
//! | Export | Core function |
//! |--------|---------------|
//! | `isFeasible(score)` | `is_feasible` |
//! | `enumerate(score)` | `enumerate` |
//! | `optimal(score)` | `optimal` |
//! | `suggest(score)` | `suggest` |
//! | `validate(score, throws)` | `validate` |

use js_sys::Array;
use wasm_bindgen::prelude::*;

use checkout_core::{Checkout, Verdict};

/// Verdict exposed to JS. Field-for-field copy of the core `Verdict`,
/// with checkouts flattened to token strings.
#[wasm_bindgen(js_name = Verdict)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsVerdict {
    legal: bool,
    optimal: bool,
    message: String,
    code: Option<String>,
    min_darts: Option<u32>,
    example: Option<String>,
}

#[wasm_bindgen(js_class = Verdict)]
impl JsVerdict {
    #[wasm_bindgen(getter)]
    pub fn legal(&self) -> bool {
        self.legal
    }

    #[wasm_bindgen(getter)]
    pub fn optimal(&self) -> bool {
        self.optimal
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// Rejection code, `undefined` for legal attempts.
    #[wasm_bindgen(getter)]
    pub fn code(&self) -> Option<String> {
        self.code.clone()
    }

    #[wasm_bindgen(getter, js_name = minDarts)]
    pub fn min_darts(&self) -> Option<u32> {
        self.min_darts
    }

    /// Space-separated preferred checkout, e.g. `"T20 D20"`.
    #[wasm_bindgen(getter)]
    pub fn example(&self) -> Option<String> {
        self.example.clone()
    }
}

impl From<Verdict> for JsVerdict {
    fn from(v: Verdict) -> Self {
        Self {
            code: v.code().map(str::to_string),
            legal: v.legal,
            optimal: v.optimal,
            message: v.message,
            min_darts: v.min_darts.and_then(|n| u32::try_from(n).ok()),
            example: v.example.map(|c| c.to_string()),
        }
    }
}

#[wasm_bindgen(js_name = isFeasible)]
pub fn is_feasible(score: u32) -> bool {
    checkout_core::is_feasible(score)
}

/// Every checkout for `score` as `string[][]`, preferred routes first.
#[wasm_bindgen]
pub fn enumerate(score: u32) -> Array {
    to_js_routes(&checkout_core::enumerate(score))
}

/// Optimal checkouts for `score` as `string[][]`.
#[wasm_bindgen]
pub fn optimal(score: u32) -> Array {
    to_js_routes(&checkout_core::optimal(score))
}

/// Preferred checkout as `string[]`, `undefined` if none.
#[wasm_bindgen]
pub fn suggest(score: u32) -> Option<Array> {
    checkout_core::suggest(score).map(|c| to_js_route(&c))
}

#[wasm_bindgen]
pub fn validate(score: u32, throws: Vec<String>) -> JsVerdict {
    checkout_core::validate(score, throws.as_slice()).into()
}

fn to_js_routes(checkouts: &[Checkout]) -> Array {
    checkouts.iter().map(to_js_route).collect()
}

fn to_js_route(checkout: &Checkout) -> Array {
    checkout
        .tokens()
        .into_iter()
        .map(JsValue::from)
        .collect()
}

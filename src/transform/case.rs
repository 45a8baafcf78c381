//! kebab-case と PascalCase の相互変換
//!
//! `DatePicker` ⇄ `date-picker` 程度を想定した best-effort の変換。
//! 略語を含む名前などでは逆変換が元に戻らないことがある。

use convert_case::{Case, Casing};

/// `DatePicker` → `date-picker`
pub fn to_kebab_case(input: &str) -> String {
    input.trim().to_case(Case::Kebab)
}

/// `date-picker` → `DatePicker`
pub fn to_pascal_case(input: &str) -> String {
    input.trim().to_case(Case::Pascal)
}

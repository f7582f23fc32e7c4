//! Render an example survey as a standalone HTML form.
//!
//! Run with `cargo run --example html_preview > preview.html` and open the
//! file in a browser.

use surveyforge_doc_html::to_html;

fn main() {
    let survey = example_forms::customer_feedback();
    println!("{}", to_html(&survey));
}

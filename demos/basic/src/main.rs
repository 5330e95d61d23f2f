use greeting_core::{Hello, assert_in_document, render};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let name = std::env::args().nth(1).unwrap_or_else(|| "World".to_string());
    let doc = render(&Hello::new(name.as_str()));

    assert_in_document(&doc, &format!("Hello, {name}!"))?;
    println!("{}", doc.to_html());
    Ok(())
}

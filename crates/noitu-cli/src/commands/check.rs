use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use noitu_core::normalize;

#[derive(Debug, Serialize)]
struct WordCheck<'a> {
    input: &'a str,
    token: Option<String>,
    in_dictionary: bool,
}

pub fn run(dict_path: &Path, words: &[String], json: bool) -> Result<(), String> {
    let dict = super::load_dictionary(dict_path);

    let checks: Vec<WordCheck<'_>> = words
        .iter()
        .map(|input| {
            let token = normalize(input);
            let in_dictionary = token.as_ref().is_some_and(|t| dict.contains(t.as_str()));
            WordCheck {
                input: input.as_str(),
                token: token.map(String::from),
                in_dictionary,
            }
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&checks).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Input", "Token", "In dictionary"]);
    for check in &checks {
        table.add_row(vec![
            check.input.to_string(),
            check.token.clone().unwrap_or_else(|| "-".to_string()),
            if check.in_dictionary { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{table}");
    println!();
    println!(
        "  {} words in dictionary{}",
        dict.len(),
        if dict.is_fallback() { " (built-in)" } else { "" }
    );

    Ok(())
}

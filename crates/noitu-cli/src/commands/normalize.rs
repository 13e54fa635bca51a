use noitu_core::normalize;

pub fn run(texts: &[String]) -> Result<(), String> {
    for text in texts {
        match normalize(text) {
            Some(token) => println!("{token}"),
            None => println!("(no token)"),
        }
    }
    Ok(())
}

use std::path::Path;

use resume_core::core::document::extract_document_text;
use resume_core::core::parser::ResumeParser;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: parse_resume <path-to-resume.pdf|docx>");
        std::process::exit(1);
    }

    let path = &args[1];
    if !Path::new(path).exists() {
        eprintln!("File not found: {path}");
        std::process::exit(2);
    }

    let file_name = Path::new(path)
        .file_name()
        .and_then(|v| v.to_str())
        .unwrap_or("resume.pdf")
        .to_string();

    let bytes = std::fs::read(path)?;
    let text = extract_document_text(&file_name, &bytes)?;

    let profile = ResumeParser::new().parse(&text);
    println!("{}", serde_json::to_string_pretty(&profile)?);

    Ok(())
}

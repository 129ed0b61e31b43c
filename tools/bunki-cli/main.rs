use bunki::prelude::*;
use clap::Parser;

/// Inspect a survey document: show per-page question visibility under a
/// given answer sheet, and the rules attached to each question.
#[derive(Parser)]
#[command(name = "bunki-cli", version, about)]
struct Args {
    /// Path to the survey document JSON.
    survey: String,

    /// Optional answer sheet JSON (question id -> answer value).
    #[arg(long)]
    answers: Option<String>,

    /// Only inspect this page index.
    #[arg(long)]
    page: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let survey_json = std::fs::read_to_string(&args.survey)?;
    let survey = Survey::from_json(&survey_json)?;

    let answers = match &args.answers {
        Some(path) => AnswerSheet::from_file(path)?,
        None => AnswerSheet::new(),
    };

    println!(
        "Survey '{}': {} page(s), {} answer(s) loaded",
        survey.title,
        survey.page_count(),
        answers.len()
    );

    for (page_index, page) in survey.pages.iter().enumerate() {
        if let Some(only) = args.page
            && only != page_index
        {
            continue;
        }

        println!("\nPage {} ({} questions):", page_index, page.questions.len());
        for question in &page.questions {
            let rules = extract_rules(question);
            let visible = is_visible(&rules, &answers);
            let marker = if visible { "shown " } else { "hidden" };
            println!(
                "  [{}] {} ({} rule(s))",
                marker,
                question.id,
                rules.len()
            );
            for rule in rules.iter() {
                let logical = rule
                    .logical
                    .map(|op| format!(" {:?}", op).to_uppercase())
                    .unwrap_or_default();
                println!(
                    "           group {} | {} {} {}{}",
                    rule.group_index.unwrap_or(0),
                    rule.question_id,
                    rule.condition.operator,
                    rule.condition.value,
                    logical
                );
            }
        }
    }

    Ok(())
}

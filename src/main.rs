//! Interactive intake form on the terminal.
//!
//! Reads one command per line from stdin and re-renders the page after
//! each one. Type `help` for the command list.

use anyhow::Result;
use patient_intake::client::IntakeClient;
use patient_intake::config::Config;
use patient_intake::form::{ConditionTag, FormField};
use patient_intake::notice::NoticeKind;
use patient_intake::page::{Page, PageView};
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

const HELP: &str = "\
Commands:
  lang                    switch language
  demo                    load demo data
  set <field> <value>     fill a field (e.g. set first_name Jane)
  check <condition>       tick diabetes | hypertension | asthma
  uncheck <condition>     untick a condition
  show                    print the page
  submit                  validate and submit the form
  json                    show/hide the raw FHIR bundle
  download                save the FHIR bundle to the download directory
  close                   close the result panel
  health                  check the intake service
  quit                    exit";

/// Rendered text of a labeled element, or the key itself if it has none.
fn label<'a>(view: &PageView, key: &'a str) -> &'a str {
    view.labels
        .iter()
        .find(|l| l.key == key)
        .map(|l| l.text)
        .unwrap_or(key)
}

fn print_page(page: &Page) {
    let view = page.render();
    let form = page.form();

    println!();
    println!("== {} ==  [{}]", label(&view, "title"), view.toggle_label);
    println!("{}", label(&view, "subtitle"));

    for field in FormField::ALL {
        let marker = if view.invalid_fields.contains(&field) { "!" } else { " " };
        let required = if field.is_required() { "*" } else { " " };
        let placeholder = field
            .placeholder_key()
            .and_then(|key| view.placeholders.iter().find(|p| p.key == key))
            .map(|p| p.text)
            .unwrap_or("");
        let value = form.value(field);
        let shown = if value.is_empty() { placeholder } else { value };
        println!(
            "{}{} {:<26} {:<20} {}",
            marker,
            required,
            label(&view, field.label_key()),
            format!("({})", field.name()),
            shown
        );
    }

    for tag in ConditionTag::ALL {
        let mark = if form.is_checked(tag) { "x" } else { " " };
        println!("  [{}] {} ({})", mark, label(&view, tag.label_key()), tag.value());
    }

    println!("  < {} >  < {} >", view.submit_label, label(&view, "btn_demo"));

    if let Some(notice) = &view.notice {
        let prefix = match notice.kind {
            NoticeKind::Success => "✓",
            NoticeKind::Error => "✗",
        };
        println!("{} {}", prefix, notice.text);
    }

    if let Some(summary) = &view.result {
        println!("-- {} --  [{}]", summary.title, summary.close_label);
        println!("  {}: {}", summary.patient_id_label, summary.patient_id);
        println!("  {}: {}", summary.resources_label, summary.resources_text());
        println!("  < {} >  < {} >", summary.view_json_label, summary.download_label);
    }

    if let Some(result) = page.result() {
        match result.json_view() {
            Ok(Some(json)) => println!("{}", json),
            Ok(None) => {}
            Err(e) => error!("Failed to render bundle JSON: {}", e),
        }
    }
}

async fn handle_command(
    line: &str,
    page: &mut Page,
    client: &IntakeClient,
    config: &Config,
) -> bool {
    let line = line.trim();
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
        "" => return true,
        "help" => println!("{}", HELP),
        "quit" | "exit" => return false,
        "lang" => {
            page.toggle_language();
        }
        "demo" => page.load_demo(Instant::now()),
        "set" => {
            let (name, value) = rest.split_once(' ').unwrap_or((rest, ""));
            match FormField::from_name(name) {
                Some(field) => page.edit_field(field, value.trim()),
                None => println!("Unknown field: {}", name),
            }
        }
        "check" | "uncheck" => match ConditionTag::from_value(rest) {
            Some(tag) => page.set_condition(tag, command == "check"),
            None => println!("Unknown condition: {}", rest),
        },
        "show" => {}
        "submit" => {
            if let Err(e) = page.submit(client).await {
                info!("Submission not started: {}", e);
            }
        }
        "json" => {
            if page.toggle_result_json().is_none() {
                println!("No result to show");
            }
        }
        "download" => match page.download_result(&config.download_dir) {
            Ok(path) => println!("Saved {}", path.display()),
            Err(e) => println!("{:#}", e),
        },
        "close" => page.close_result(),
        "health" => match client.check_health().await {
            Ok(health) => println!(
                "Service status: {} {}",
                health.status,
                health.timestamp.unwrap_or_default()
            ),
            Err(e) => println!("{:#}", e),
        },
        other => println!("Unknown command: {} (try `help`)", other),
    }

    true
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("patient_intake=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let client = IntakeClient::from_config(&config)?;
    info!("Intake endpoint: {}", client.submit_url());

    let mut page = Page::new();
    print_page(&page);
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        page.dismiss_expired(Instant::now());
        if !handle_command(&line, &mut page, &client, &config).await {
            break;
        }
        print_page(&page);
    }

    info!("Bye");
    Ok(())
}

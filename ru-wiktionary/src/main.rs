use clap::{Parser, Subcommand, ValueEnum};
use ru_grammar::InflectionCodes;
use ru_wiktionary::{fetch, InflectionReport, WiktionaryPage};

/// Look up Russian inflection paradigms on Wiktionary
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the inflection report for a word
    Show {
        /// The dictionary form to look up
        word: String,

        /// Only print the forms carrying this inflection code
        #[arg(long)]
        code: Option<u16>,

        /// Report format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Xml,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let Command::Show { word, code, format } = args.command;

    let codes = InflectionCodes::embedded();
    let report = match fetch::fetch_page(&word).await {
        Ok(html) => {
            let page = WiktionaryPage::from_html(&word, &html);
            InflectionReport::from_page(&page, &codes)
        }
        Err(err) => {
            // An unreachable page reads the same as an unparseable one.
            log::warn!("fetch failed for {word:?}: {err}");
            InflectionReport::not_found(&word)
        }
    };

    if let Some(code) = code {
        for form in report.forms_with_code(code) {
            println!("{form}");
        }
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        OutputFormat::Xml => println!("{}", report.to_xml()),
    }
    Ok(())
}

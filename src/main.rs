use clap::{Arg, ArgAction, ArgMatches, Command};
use std::sync::Arc;
use wordwise::{Config, Toolbox, tool_definitions};
use wordwise_mt::{MockGenerator, MockMode, WordTranslator};

fn cli() -> Command {
    let mock_arg = Arg::new("mock")
        .long("mock")
        .short('m')
        .help("Use the mock generator instead of Gemini")
        .action(ArgAction::SetTrue);

    Command::new("wordwise")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Random vocabulary and word translation for language learners")
        .subcommand_required(true)
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .short('d')
                .global(true)
                .env("WORDWISE_DATA_DIR")
                .help("Directory containing <Language>/word-list-cleaned.json files"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Show debug logging")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("random")
                .about("Print n random words of a language")
                .arg(Arg::new("language").required(true).index(1))
                .arg(
                    Arg::new("n")
                        .required(true)
                        .index(2)
                        .value_parser(clap::value_parser!(i64)),
                )
                .arg(
                    Arg::new("difficulty")
                        .long("difficulty")
                        .short('l')
                        .help("Restrict to beginner, intermediate or advanced words"),
                )
                .arg(
                    Arg::new("translate")
                        .long("translate")
                        .short('t')
                        .value_name("TARGET_LANGUAGE")
                        .help("Translate the sampled words into this language"),
                )
                .arg(mock_arg.clone()),
        )
        .subcommand(
            Command::new("translate")
                .about("Translate words from one language into another")
                .arg(Arg::new("source-language").required(true).index(1))
                .arg(Arg::new("target-language").required(true).index(2))
                .arg(
                    Arg::new("words")
                        .required(true)
                        .index(3)
                        .num_args(1..),
                )
                .arg(mock_arg),
        )
        .subcommand(Command::new("languages").about("List languages with a word list"))
        .subcommand(
            Command::new("stats")
                .about("Show word counts per difficulty level")
                .arg(Arg::new("language").required(true).index(1)),
        )
        .subcommand(Command::new("tools").about("Print the tool definitions as JSON"))
}

/// Build the toolbox; the translator is only required for commands that translate
fn toolbox(
    config: &Config,
    matches: &ArgMatches,
    target_language: Option<&str>,
) -> Result<Toolbox, Box<dyn std::error::Error>> {
    let use_mock = matches
        .try_get_one::<bool>("mock")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false);

    let translator = if use_mock || target_language.is_none() {
        let suffix = format!("_{}", target_language.unwrap_or("mock").to_lowercase());
        WordTranslator::new(Arc::new(MockGenerator::new(MockMode::Suffix(suffix))))
    } else {
        config.gemini_translator().map_err(|e| {
            eprintln!("   Set GOOGLE_API_KEY (or put it in .env), or use --mock");
            e
        })?
    };

    Ok(Toolbox::new(config.word_list_store(), translator))
}

async fn print_translations(
    toolbox: &Toolbox,
    words: &[String],
    source_language: &str,
    target_language: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    for pair in toolbox
        .translate_words(words, source_language, target_language)
        .await?
    {
        println!("{}\t{}", pair.source, pair.target);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let matches = cli().get_matches();
    wordwise::init_tracing(if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    });

    let mut config = Config::from_env();
    if let Some(data_dir) = matches.get_one::<String>("data-dir") {
        config.data_dir = data_dir.into();
    }
    tracing::debug!(?config, "resolved configuration");

    match matches.subcommand() {
        Some(("random", sub)) => {
            let language = sub.get_one::<String>("language").unwrap();
            let n = *sub.get_one::<i64>("n").unwrap();
            let target = sub.get_one::<String>("translate").map(String::as_str);
            let toolbox = toolbox(&config, sub, target)?;

            let words = match sub.get_one::<String>("difficulty") {
                Some(difficulty) => {
                    toolbox.get_random_words_by_difficulty(language, difficulty, n)?
                }
                None => toolbox.get_random_words(language, n)?,
            };

            match target {
                Some(target) => print_translations(&toolbox, &words, language, target).await?,
                None => words.iter().for_each(|word| println!("{}", word)),
            }
        }
        Some(("translate", sub)) => {
            let source = sub.get_one::<String>("source-language").unwrap();
            let target = sub.get_one::<String>("target-language").unwrap();
            let words: Vec<String> = sub.get_many::<String>("words").unwrap().cloned().collect();
            let toolbox = toolbox(&config, sub, Some(target))?;
            print_translations(&toolbox, &words, source, target).await?;
        }
        Some(("languages", sub)) => {
            for language in toolbox(&config, sub, None)?.languages()? {
                println!("{}", language);
            }
        }
        Some(("stats", sub)) => {
            let language = sub.get_one::<String>("language").unwrap();
            let summary = toolbox(&config, sub, None)?.summary(language)?;
            println!("{}: {} words", language, summary.total);
            println!("  beginner:     {}", summary.beginner);
            println!("  intermediate: {}", summary.intermediate);
            println!("  advanced:     {}", summary.advanced);
        }
        Some(("tools", _)) => {
            println!("{}", serde_json::to_string_pretty(&tool_definitions())?);
        }
        _ => unreachable!("subcommand_required is set"),
    }

    Ok(())
}

use clap::{Arg, Command};
use std::path::Path;
use std::process;
use tenglish::config::load_config_from_file;
use tenglish::{ConversionConfig, TenglishConverter, compose_keep_english};

fn main() {
    let matches = Command::new("tenglish")
        .version("0.1.0")
        .about("English to Telangana-style Tenglish converter")
        .arg(
            Arg::new("text")
                .help("English text to convert")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("strength")
                .long("strength")
                .short('s')
                .help("Telugu strength, 0-100 (default: 65)")
                .value_parser(clap::value_parser!(u8)),
        )
        .arg(
            Arg::new("keep")
                .long("keep")
                .short('k')
                .help("Comma-separated words to always keep in English")
                .default_value(""),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a JSON conversion config file"),
        )
        .arg(
            Arg::new("polite")
                .long("polite")
                .help("Append the polite 'andi' ending")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("slang")
                .long("slang")
                .help("Add Telangana casual endings (ra)")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-nouns")
                .long("no-nouns")
                .help("Translate common English nouns instead of keeping them")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-postpositions")
                .long("no-postpositions")
                .help("Disable ki/lo/tho postposition styling")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show dictionary size and effective configuration")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => match load_config_from_file(Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => ConversionConfig::default(),
    };

    // Flags override whatever the config file said.
    if let Some(&strength) = matches.get_one::<u8>("strength") {
        config = config.with_strength(strength);
    }
    if matches.get_flag("polite") {
        config.polite_mode = true;
    }
    if matches.get_flag("slang") {
        config.add_telangana_slang = true;
    }
    if matches.get_flag("no-nouns") {
        config.keep_english_nouns = false;
    }
    if matches.get_flag("no-postpositions") {
        config.add_postpositions = false;
    }

    let keep_english = compose_keep_english(matches.get_one::<String>("keep").unwrap());
    let converter = TenglishConverter::new();

    if matches.get_flag("verbose") {
        println!("Dictionary: {} entries", converter.dictionary().len());
        println!("Config: {:?}", config);
        println!("Keep-English: {} words", keep_english.len());
        println!();
    }

    let text = matches.get_one::<String>("text").unwrap();
    println!("{}", converter.convert(text, &config, &keep_english));
}

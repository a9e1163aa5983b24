use chordsheet::{clean_sheet_text, ChordSheetError, SheetConfig, SheetParser, Transposer};
use std::env;
use std::fs;
use std::io::Read;
use std::process;

const USAGE: &str = "Usage: chordsheet [--transpose N] [--json] [--clean] [--config FILE] <sheet|->";

struct Options {
    input: String,
    semitones: i32,
    json: bool,
    clean: bool,
    config: Option<String>,
}

fn parse_args(args: &[String]) -> Result<Options, ChordSheetError> {
    let mut input = None;
    let mut semitones = 0;
    let mut json = false;
    let mut clean = false;
    let mut config = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--transpose" | "-t" => {
                let value = iter
                    .next()
                    .ok_or_else(|| ChordSheetError::Usage("--transpose needs a value".to_string()))?;
                semitones = value.parse().map_err(|_| {
                    ChordSheetError::Usage(format!("Invalid semitone count '{}'", value))
                })?;
            }
            "--json" => json = true,
            "--clean" => clean = true,
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| ChordSheetError::Usage("--config needs a file".to_string()))?;
                config = Some(value.clone());
            }
            "--help" | "-h" => return Err(ChordSheetError::Usage(USAGE.to_string())),
            _ if input.is_none() => input = Some(arg.clone()),
            _ => return Err(ChordSheetError::Usage(USAGE.to_string())),
        }
    }

    Ok(Options {
        input: input.ok_or_else(|| ChordSheetError::Usage(USAGE.to_string()))?,
        semitones,
        json,
        clean,
        config,
    })
}

fn read_input(input: &str) -> Result<String, ChordSheetError> {
    if input == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| ChordSheetError::io("<stdin>", e))?;
        return Ok(content);
    }
    fs::read_to_string(input).map_err(|e| ChordSheetError::io(input, e))
}

fn run(options: Options) -> Result<String, ChordSheetError> {
    let config = match &options.config {
        Some(path) => SheetConfig::load(path)?,
        None => SheetConfig::default(),
    };

    let mut source = read_input(&options.input)?;
    if options.clean {
        source = clean_sheet_text(&source);
    }

    let parser = SheetParser::new(&config);
    let song = if options.input == "-" {
        parser.parse(&source)
    } else {
        parser.parse_with_path(&source, &options.input)
    };

    let transposer = Transposer::new(&config);
    if options.json {
        let view = song.transposed_with(options.semitones, &transposer);
        Ok(serde_json::to_string_pretty(&view)? + "\n")
    } else {
        Ok(chordsheet::render::render_plain_with(
            &song,
            options.semitones,
            &transposer,
        ))
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    match run(options) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

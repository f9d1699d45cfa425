use std::path::PathBuf;
use std::process;

use clap::Parser;

use transcriptor_core::audio::domain::language::LanguageHint;
use transcriptor_core::audio::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use transcriptor_core::audio::infrastructure::whisper_loader::WhisperLoader;
use transcriptor_core::pipeline::transcribe_file_use_case::{
    TranscribeFileUseCase, TranscribeRequest,
};
use transcriptor_core::shared::constants::{DEFAULT_LANGUAGE, DEFAULT_MODEL};

/// Transcribe un archivo de audio a texto usando Whisper.
#[derive(Parser)]
#[command(name = "transcriptor")]
struct Cli {
    /// Ruta del archivo de audio.
    audio: PathBuf,

    /// Ruta del archivo de salida .txt. Por defecto, la del audio con extensión .txt.
    #[arg(long)]
    salida: Option<PathBuf>,

    /// Modelo Whisper a utilizar (tiny, base, small, medium, large).
    #[arg(long, default_value = DEFAULT_MODEL)]
    modelo: String,

    /// Código ISO 639-1 del idioma del audio. Use "none" para autodetección.
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    lenguaje: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    log::info!("Using model '{}'", cli.modelo);
    let loader = WhisperLoader::new().with_progress(download_progress);
    let use_case = TranscribeFileUseCase::new(Box::new(FfmpegAudioReader), Box::new(loader));

    let mut request = TranscribeRequest::new(cli.audio);
    request.destination = cli.salida;
    request.model = cli.modelo;
    request.language = LanguageHint::parse(&cli.lenguaje);

    let written = use_case.execute(&request)?;
    eprintln!();
    println!("Transcripción guardada en: {}", written.display());
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.audio.is_file() {
        return Err(format!("No se encontró el archivo de audio: {}", cli.audio.display()).into());
    }
    Ok(())
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDescargando modelo Whisper... {pct}%");
    } else {
        eprint!("\rDescargando modelo Whisper... {downloaded} bytes");
    }
}

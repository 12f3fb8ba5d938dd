use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use gtwav::convert::convert;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// 16-bit pcm wav file to convert (mono or stereo)
    input: PathBuf,

    /// C identifier for the generated array
    #[arg(default_value = "audio_data")]
    array_name: String,

    /// Directory the .c/.h pair is written into (created if missing)
    #[arg(short, long, default_value = "src")]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    // usage errors must exit 1; help/version still exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    println!("Converting {} to c data...", cli.input.display());

    match convert(&cli.input, &cli.array_name, &cli.out_dir) {
        Ok(report) => {
            println!("Wrote {}", report.source_path.display());
            println!("Wrote {}", report.header_path.display());
            println!(
                "  {} samples, {} bytes, {} ms at {} hz",
                report.sample_count, report.byte_size, report.duration_ms, report.sample_rate
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Temperature logger driver.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use primer_core::errors::PrimerResult;
use primer_core::file_io;
use primer_core::programs::temperature::{self, Clock, DailyLog, DailySummary, LatestRule, TemperatureSample};

use crate::prompt::Prompter;

/// Settings for one logging session.
#[derive(Debug, Clone, Default)]
pub struct TempsOptions {
    /// Output file; prompted for when `None`
    pub output: Option<PathBuf>,
    pub rule: LatestRule,
    pub strict: bool,
}

fn read_sample<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    k: usize,
    strict: bool,
) -> PrimerResult<TemperatureSample> {
    prompter.line(&format!("SAMPLE #{}", k))?;
    let degrees: f64 = prompter.prompt("Enter degrees (Fahrenheit): ", "degrees")?;
    let hour: i32 = prompter.prompt("Enter hours (Military time): ", "hour")?;
    let minute: i32 = prompter.prompt("Enter minutes (Military time): ", "minute")?;

    let time = Clock::new(hour, minute);
    if strict {
        time.validate()?;
    }
    Ok(TemperatureSample::new(degrees, time))
}

pub fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, options: &TempsOptions) -> PrimerResult<DailySummary> {
    let path = match &options.output {
        Some(path) => path.clone(),
        None => PathBuf::from(prompter.prompt::<String>("Enter the output file name: ", "file_name")?),
    };
    let count: i64 = prompter.prompt("Enter the number of samples: ", "sample_count")?;

    let mut log = DailyLog::default();
    for k in 1..=count.max(0) as usize {
        prompter.line("")?;
        log.push(read_sample(prompter, k, options.strict)?);
    }

    let summary = temperature::calculate(&log, options.rule);
    file_io::write_log(&path, &temperature::render_log(&log, &summary))?;
    Ok(summary)
}

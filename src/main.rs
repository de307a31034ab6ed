use std::path::Path;
use std::process::ExitCode;

use oxideticks::data::datetime::parse_point_in_time;
use oxideticks::{
    find_closest, max_of_column, AxisConfig, Error, PointInTime, Result, TickFormatter,
    TimeLabelFormatter, TimeTicks,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: oxideticks [--config FILE] <command> [args]

commands:
  label <ts>...             adaptive label for each timestamp
  ticks <ts>...             time-axis tick labels, with tick index
  closest <query> <ts>...   index of the timestamp closest to query, -1 if none
  max <column> <rows>       maximum of a column of a JSON matrix

<ts> is RFC 3339, epoch milliseconds, or a date such as 2024-05-15 13:45";

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(Error::Usage(msg)) => {
            eprintln!("{msg}\n\n{USAGE}");
            ExitCode::from(2)
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<Vec<String>> {
    let (config, args) = match args {
        [flag, path, rest @ ..] if flag == "--config" => (AxisConfig::load(Path::new(path))?, rest),
        [flag] if flag == "--config" => return Err(Error::Usage("--config needs a file".to_string())),
        _ => (AxisConfig::default(), args),
    };

    let Some((command, rest)) = args.split_first() else {
        return Err(Error::Usage("missing command".to_string()));
    };

    match command.as_str() {
        "label" => {
            let formatter = TimeLabelFormatter::new(config.zone);
            Ok(parse_all(rest)?.into_iter().map(|p| formatter.format(p)).collect())
        }
        "ticks" => {
            let ticks = TimeTicks::new(&config);
            let labels = ticks.format_ticks(&parse_all(rest)?);
            Ok(labels
                .into_iter()
                .enumerate()
                .map(|(i, label)| format!("{i}\t{label}"))
                .collect())
        }
        "closest" => {
            let Some((query, sequence)) = rest.split_first() else {
                return Err(Error::Usage("closest needs a query timestamp".to_string()));
            };
            let query = parse_point_in_time(query)?;
            let sequence = parse_all(sequence)?;
            let index = find_closest(&sequence, query)
                .map(|i| i.to_string())
                .unwrap_or_else(|| "-1".to_string());
            Ok(vec![index])
        }
        "max" => {
            let [column, rows] = rest else {
                return Err(Error::Usage("max needs a column index and a JSON matrix".to_string()));
            };
            let column: usize = column
                .parse()
                .map_err(|_| Error::Usage(format!("bad column index {column:?}")))?;
            let rows: Vec<Vec<f64>> = serde_json::from_str(rows)?;
            Ok(vec![max_of_column(&rows, column).to_string()])
        }
        other => Err(Error::Usage(format!("unknown command {other:?}"))),
    }
}

fn parse_all(values: &[String]) -> Result<Vec<PointInTime>> {
    values.iter().map(|v| parse_point_in_time(v)).collect()
}

use super::cli_args::CliArgs;
use super::AppError;
use fretecalc_core::model::calculation::FreightQuery;
use serde_json::{json, Value};
use std::fs::File;
use std::io::BufReader;

/// reads the query file, runs the engine once per query and writes the
/// results as a JSON array. a query that fails to parse becomes an
/// error row in the output rather than aborting the batch, matching the
/// per-row error convention of the result set.
pub fn command_line_runner(args: &CliArgs) -> Result<(), AppError> {
    let queries = read_queries(&args.query_file)?;
    log::info!("running {} freight queries", queries.len());

    let results: Vec<Value> = queries.iter().map(run_query).collect();

    let encoded = if args.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };
    match &args.output_file {
        Some(filename) => std::fs::write(filename, encoded).map_err(|e| AppError::OutputFile {
            filename: filename.clone(),
            source: e,
        })?,
        None => println!("{encoded}"),
    }
    Ok(())
}

/// loads the query file as either a single query object or an array.
fn read_queries(filename: &str) -> Result<Vec<Value>, AppError> {
    let file = File::open(filename).map_err(|e| AppError::QueryFile {
        filename: filename.to_string(),
        source: e,
    })?;
    let reader = BufReader::new(file);
    let json: Value = serde_json::from_reader(reader)?;
    match json {
        Value::Array(queries) => Ok(queries),
        other => Ok(vec![other]),
    }
}

fn run_query(query_json: &Value) -> Value {
    match FreightQuery::try_from(query_json) {
        Ok(query) => {
            let result = query.calculate();
            serde_json::to_value(&result).unwrap_or_else(|e| json!({ "error": e.to_string() }))
        }
        Err(e) => json!({ "error": e.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_run_query_produces_result_row() {
        let row = run_query(&json!({
            "route": {
                "origin_state": "PR",
                "origin_city": "Curitiba",
                "destination_state": "SP",
                "destination_city": "São Paulo",
                "distance_km": 408,
                "axles": 5,
                "cargo_value": 10000,
                "cargo_weight_kg": 12000
            },
            "charges": {"use_antt_min_freight": true, "toll_value": 100}
        }));
        assert!(row.get("error").is_none());
        assert_eq!(row["route_type"], json!("interstate"));
        assert_eq!(row["toll_exempt_from_icms_base"], json!(true));
    }

    #[test]
    fn test_run_query_malformed_becomes_error_row() {
        let row = run_query(&json!({"route": {"distance_km": {"value": 10}}}));
        assert!(row.get("error").is_some());
    }
}

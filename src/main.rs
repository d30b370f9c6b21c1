use std::env;
use std::process;
use std::time::Instant;
use log::{ debug, info };
use num_bigint::BigInt;
use linrec::{ F32, FiniteField, Recurrence, find_linear_recurrence, nth_term, fibonacci, lucas, cumulative };

const USAGE: &str = "\
usage:
    linrec fib <n>
    linrec lucas <n>
    linrec cumulative <n> <a0> <a1> ...
    linrec infer <a0> <a1> ...
    linrec nth <n> <a0,a1,...> <c0,c1,...>

all values are reduced modulo 998244353";

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    match run(&args[1..]) {
        Ok(output) => println!("{}", output),
        Err(message) => {
            eprintln!("{}\n\n{}", message, USAGE);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<String, String> {
    let command = args.first().ok_or_else(|| String::from("no command given"))?;
    debug!("running '{}' with arguments {:?}", command, &args[1..]);

    let now = Instant::now();
    let output = match command.as_str() {
        "fib" => {
            let n = parse_index(args.get(1))?;
            fibonacci::<F32, _>(n).to_string()
        },
        "lucas" => {
            let n = parse_index(args.get(1))?;
            lucas::<F32, _>(n).to_string()
        },
        "cumulative" => {
            let n = parse_index(args.get(1))?;
            let initial = parse_values(&args[2..])?;
            cumulative(&initial, n).to_string()
        },
        "infer" => {
            let sequence = parse_values(&args[1..])?;
            let recurrence = find_linear_recurrence(&sequence);
            format_recurrence(&recurrence)?
        },
        "nth" => {
            let n = parse_index(args.get(1))?;
            let initial = parse_list(args.get(2))?;
            let coefficients = parse_list(args.get(3))?;
            nth_term(&initial, &coefficients, n).map_err(|e| e.to_string())?.to_string()
        },
        _ => return Err(format!("unknown command '{}'", command)),
    };
    info!("'{}' completed in {} ms", command, now.elapsed().as_millis());

    return Ok(output);
}

// HELPER FUNCTIONS
// ================================================================================================

fn format_recurrence(recurrence: &Recurrence<F32>) -> Result<String, String> {
    let encoded = recurrence.to_bytes().map_err(|e| e.to_string())?;
    return Ok(format!("order: {}\n{}\nencoded: {}", recurrence.order(), recurrence, hex::encode(encoded)));
}

fn parse_index(arg: Option<&String>) -> Result<BigInt, String> {
    let arg = arg.ok_or_else(|| String::from("index is missing"))?;
    return arg.parse::<BigInt>().map_err(|_| format!("'{}' is not a valid index", arg));
}

fn parse_values(args: &[String]) -> Result<Vec<F32>, String> {
    return args.iter().map(|arg| parse_value(arg)).collect();
}

fn parse_list(arg: Option<&String>) -> Result<Vec<F32>, String> {
    let arg = arg.ok_or_else(|| String::from("list of values is missing"))?;
    if arg.is_empty() {
        return Ok(Vec::new());
    }
    return arg.split(',').map(|value| parse_value(value.trim())).collect();
}

fn parse_value(arg: &str) -> Result<F32, String> {
    let value = arg.parse::<i64>().map_err(|_| format!("'{}' is not a valid integer", arg))?;
    return Ok(F32::from_i64(value));
}

use std::env::{args, current_dir, var};
use std::process::exit;
use std::thread::sleep;
use std::time::Duration;

fn main() {
    let args: Vec<String> = args().skip(1).collect();

    println!("cwd={}", current_dir().unwrap().display());
    if let Ok(marker) = var("RELAY_PAYLOAD_MARKER") {
        println!("env={}", marker);
    }
    for arg in &args {
        println!("arg={}", arg);
    }

    let mut code = 0;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--exit" => code = iter.next().unwrap().parse().unwrap(),
            "--sleep" => sleep(Duration::from_millis(iter.next().unwrap().parse().unwrap())),
            _ => {}
        }
    }

    exit(code);
}

use std::env;
use std::process;

use intpdf::EstimatorConfig;
use log::info;

fn main() {
    env_logger::init();

    let result = EstimatorConfig::from_os_args(env::args_os().skip(1)).and_then(|config| {
        info!("estimating with {} samples", config.samples);
        config.run()
    });

    match result {
        Ok(estimate) => println!("{:.6}", estimate.value()),
        Err(err) => {
            eprintln!("intpdf: {}", err);
            process::exit(1);
        }
    }
}

use clap::Parser;

use crate::model::Regressor;
use crate::opts::Opts;
use crate::prelude::*;

mod evaluation;
mod format;
mod logging;
mod math;
mod model;
mod opts;
mod prelude;
mod web;

#[tokio::main]
async fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = logging::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;

    let model = Regressor::load(&opts.web.model_path)
        .with_context(|| format!("failed to load the model from {:?}", opts.web.model_path))?;
    logging::set_model_tags(&opts.web.model_path, model.coefficients.len());
    web::run(&opts.web, Arc::new(model)).await
}

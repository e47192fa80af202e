use crate::infra::scoring_engine;
use clap::Args;
use serde::Serialize;
use std::io::Write;
use triage::error::AppError;
use triage::scoring::{Outcome, RuleScore, ScoringEngine};

#[derive(Args, Debug, Default)]
pub(crate) struct PredictArgs {
    /// Symptom names, quoted when they contain spaces
    #[arg(required = true)]
    pub(crate) symptoms: Vec<String>,
    /// Include the per-rule score breakdown, best match first
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct PredictReport {
    pub(crate) outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) ranking: Option<Vec<RuleScore>>,
}

pub(crate) fn build_report(engine: &ScoringEngine, args: &PredictArgs) -> PredictReport {
    let outcome = engine.predict(&args.symptoms);
    let ranking = args.explain.then(|| {
        let mut ranking: Vec<RuleScore> = engine
            .rank(&args.symptoms)
            .into_iter()
            .filter(|score| score.matched > 0)
            .collect();
        // Stable, so catalog order breaks ties the same way scoring does.
        ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranking
    });
    PredictReport { outcome, ranking }
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let engine = scoring_engine()?;
    let report = build_report(&engine, &args);

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report).map_err(std::io::Error::from)?;
    writeln!(stdout)?;
    Ok(())
}

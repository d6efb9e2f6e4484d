use super::{OdcmAppError, OdcmArgs};
use crate::model::{
    output::accessibility_writer,
    scheduler::{OdcmOutput, ParallelOdCalculator, RunConfig},
};
use clap::Subcommand;
use odaccess_core::model::tool::OdTool;
use std::path::PathBuf;

#[derive(Debug, Clone, Subcommand)]
pub enum OdcmOperation {
    /// count destinations reachable from each origin and how often they are
    /// reachable across the time window
    Accessibility {
        #[command(flatten)]
        args: OdcmArgs,
        /// numeric destinations field weighting each destination, such as a
        /// job count. destinations count once each when omitted.
        #[arg(long)]
        weight_field: Option<String>,
        /// write the origins with their statistics here instead of updating
        /// the origins file
        #[arg(long)]
        output_origins: Option<PathBuf>,
    },
    /// travel time count, min, max and mean for every reachable
    /// origin-destination pair across the time window
    TravelTime {
        #[command(flatten)]
        args: OdcmArgs,
        /// output CSV, replaced if it exists
        #[arg(long)]
        output_csv: PathBuf,
    },
}

impl OdcmOperation {
    pub fn run(&self, run_config: RunConfig) -> Result<(), OdcmAppError> {
        match self {
            OdcmOperation::Accessibility {
                args,
                weight_field,
                output_origins,
            } => {
                let tool = OdTool::Accessibility {
                    weight_field: weight_field.clone(),
                };
                let calculator = ParallelOdCalculator::new(args.build_inputs(tool)?, run_config)?;
                let report = calculator.run()?;
                if let OdcmOutput::Accessibility(table) = &report.output {
                    let output = output_origins.as_ref().unwrap_or(&args.origins);
                    accessibility_writer::write_accessibility_table(
                        &args.origins,
                        &args.origins_id_field,
                        table,
                        output,
                    )?;
                }
                Ok(())
            }
            OdcmOperation::TravelTime { args, output_csv } => {
                let tool = OdTool::TravelTime {
                    output_csv: output_csv.clone(),
                };
                let calculator = ParallelOdCalculator::new(args.build_inputs(tool)?, run_config)?;
                calculator.run()?;
                Ok(())
            }
        }
    }
}

use crate::cli::commands::*;
use crate::ops::check::{self, CheckItem};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Check(args) => cmd_check(args),
    }
}

fn cmd_check(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let result = check::check_items(&args.items);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for item in &result.items {
            match item {
                CheckItem::Added { task, .. } => println!("added {}", task),
                CheckItem::Rejected { input, message, .. } => {
                    println!("rejected {:?}: {}", input, message)
                }
            }
        }
    }

    if result.valid {
        Ok(())
    } else {
        Err(format!("{} item(s) rejected", result.rejected_count()).into())
    }
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::student::StudentLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::student::{StudentPatch, StudentProfile};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::bold;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// `register`, `unregister`, `update` and `details`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Register {
            unique_id,
            name,
            roll_no,
            branch,
            semester,
            phone_no,
            fee_paid,
            photo,
        } => {
            let profile = StudentProfile {
                unique_id: unique_id.trim().to_string(),
                name: name.trim().to_string(),
                roll_no: roll_no.trim().to_string(),
                branch: branch.clone(),
                semester: semester.clone(),
                phone_no: phone_no.clone(),
                fee_paid: fee_paid.clone(),
                photo_ref: photo.clone(),
            };

            let mut pool = DbPool::new(&cfg.database)?;
            StudentLogic::register(&mut pool, &profile)?;
            success(format!(
                "Student {} ({}) registered successfully!",
                profile.name, profile.unique_id
            ));
        }

        Commands::Unregister { unique_id, yes } => {
            let prompt = format!("Unregister student {unique_id}? Attendance history is kept.");
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let mut pool = DbPool::new(&cfg.database)?;
            if StudentLogic::unregister(&mut pool, unique_id)? {
                success(format!("Student {unique_id} unregistered successfully!"));
            } else {
                warning(format!("No student registered with unique ID {unique_id}."));
            }
        }

        Commands::Update {
            unique_id,
            name,
            roll_no,
            branch,
            semester,
            phone_no,
            fee_paid,
        } => {
            let patch = StudentPatch {
                name: name.clone(),
                roll_no: roll_no.clone(),
                branch: branch.clone(),
                semester: semester.clone(),
                phone_no: phone_no.clone(),
                fee_paid: fee_paid.clone(),
            };

            let mut pool = DbPool::new(&cfg.database)?;
            if patch.is_empty() {
                // verifica comunque che lo studente esista
                StudentLogic::details(&mut pool, unique_id)?;
                info("Nothing to update.");
                return Ok(());
            }

            let updated = StudentLogic::update(&mut pool, unique_id, &patch)?;
            success(format!("Student {unique_id} updated."));
            print_profile(&updated, cfg);
        }

        Commands::Details { unique_id } => {
            let mut pool = DbPool::new(&cfg.database)?;
            let profile = StudentLogic::details(&mut pool, unique_id)?;
            print_profile(&profile, cfg);
        }

        _ => {}
    }

    Ok(())
}

fn print_profile(p: &StudentProfile, cfg: &Config) {
    header("Student Details");

    let field = |label: &str, value: &str| {
        let shown = if value.trim().is_empty() {
            cfg.placeholder.as_str()
        } else {
            value
        };
        println!(
            "{} {}",
            bold(&format!("{label:<10}")),
            colorize_optional(shown, &cfg.placeholder)
        );
    };

    field("Unique ID:", &p.unique_id);
    field("Name:", &p.name);
    field("Roll No:", &p.roll_no);
    field("Branch:", &p.branch);
    field("Semester:", &p.semester);
    field("Phone No:", &p.phone_no);
    field("Fee Paid:", &p.fee_paid);
    field("Photo:", p.photo_ref.as_deref().unwrap_or(""));
}

use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::utils::colors::{RESET, color_for_status, or_placeholder};
use crate::utils::date;
use crate::utils::formatting::bold;

const NOTES_WIDTH: usize = 78;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let mut pool = open_pool(cfg)?;
        let r = ListLogic::load(&mut pool, *id)?;

        println!("{}", bold(&format!("#{} - {}", r.process_number, r.title)));
        println!("  id:      {}", r.id);
        println!("  date:    {}", date::to_display(&r.date));
        println!("  client:  {}", or_placeholder(r.client.as_deref()));
        println!("  owner:   {}", or_placeholder(r.owner.as_deref()));
        println!(
            "  status:  {}{}{}",
            color_for_status(r.status),
            r.status.label(),
            RESET
        );
        println!("  notes:");

        match r.notes.as_deref() {
            Some(notes) if r.has_notes() => {
                for line in textwrap::wrap(notes, NOTES_WIDTH) {
                    println!("    {}", line);
                }
            }
            _ => println!("    {}", or_placeholder(None)),
        }
    }

    Ok(())
}

use super::load::load_content;
use super::ContentError;
use crate::config::ExportArgs;
use common::content::SiteContent;
use log::{info, warn};
use std::fs;

/// Runs `mojito export`.
pub fn process(args: &ExportArgs) -> Result<(), ContentError> {
    let loaded = load_content(&args.source.content)?;

    let rejected: Vec<&'static str> = loaded.load.rejected().map(|(section, _)| section.key()).collect();
    if !rejected.is_empty() {
        if args.strict {
            return Err(ContentError::Rejected { sections: rejected });
        }
        warn!("Exporting defaults for rejected section(s): {}", rejected.join(", "));
    }

    let json = encode(&loaded.load.content, args.pretty)?;
    match &args.out {
        Some(path) => {
            fs::write(path, format!("{json}\n")).map_err(|source| ContentError::Write {
                path: path.clone(),
                source,
            })?;
            info!("Wrote content to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn encode(content: &SiteContent, pretty: bool) -> Result<String, ContentError> {
    let json = if pretty {
        serde_json::to_string_pretty(content)?
    } else {
        serde_json::to_string(content)?
    };
    Ok(json)
}

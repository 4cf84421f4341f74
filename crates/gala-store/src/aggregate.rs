//! Tree aggregator: walk the upstream folder hierarchy into a flat,
//! classified asset list.
//!
//! Discovery order is depth-first: a folder's own media first, then each
//! subfolder fully expanded before its next sibling, subfolders in upstream
//! listing order. The order only matters for stable navigation, but it is
//! kept deterministic so repeated walks over an unchanged tree agree.

use std::collections::HashSet;

use gala_core::models::{alt_text, Asset};
use gala_core::taxonomy::classify;
use tracing::{debug, warn};

use crate::traits::{RemoteEntry, RemoteStore, StoreResult};

/// Caps on the tree walk so a pathological upstream tree cannot pin the
/// process on latency or memory.
#[derive(Debug, Clone, Copy)]
pub struct WalkLimits {
    pub max_depth: usize,
    pub max_folders: usize,
}

impl Default for WalkLimits {
    fn default() -> Self {
        WalkLimits {
            max_depth: 10,
            max_folders: 200,
        }
    }
}

fn is_media(mime_type: &str) -> bool {
    mime_type.starts_with("image/") || mime_type.starts_with("video/")
}

struct PendingFolder {
    folder_ref: String,
    // Name of the folder itself; None only for the root. Media items are
    // classified by this name so every file inherits its nearest ancestor
    // folder's category.
    name: Option<String>,
    depth: usize,
}

/// Recursively collect and classify the media assets under `root_ref`.
///
/// Fails when any upstream listing call errors; partial results are never
/// returned. The caller (the aggregation cache) decides what to fall back to.
pub async fn aggregate(
    store: &dyn RemoteStore,
    root_ref: &str,
    limits: WalkLimits,
) -> StoreResult<Vec<Asset>> {
    let mut assets = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut folders_visited = 0usize;

    // LIFO work stack; subfolders are pushed in reverse listing order so the
    // first sibling is fully expanded first.
    let mut stack = vec![PendingFolder {
        folder_ref: root_ref.to_string(),
        name: None,
        depth: 0,
    }];

    while let Some(folder) = stack.pop() {
        if folders_visited >= limits.max_folders {
            warn!(
                max_folders = limits.max_folders,
                "Folder cap reached, truncating tree walk"
            );
            break;
        }
        folders_visited += 1;

        let mut subfolders = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let page = store
                .list_children(&folder.folder_ref, page_token.as_deref())
                .await?;

            for entry in page.entries {
                match entry {
                    RemoteEntry::Folder { id, name } => {
                        if folder.depth >= limits.max_depth {
                            warn!(
                                folder = %name,
                                max_depth = limits.max_depth,
                                "Depth cap reached, skipping subfolder"
                            );
                        } else {
                            subfolders.push(PendingFolder {
                                folder_ref: id,
                                name: Some(name),
                                depth: folder.depth + 1,
                            });
                        }
                    }
                    RemoteEntry::File {
                        id,
                        name,
                        mime_type,
                    } => {
                        if !is_media(&mime_type) {
                            continue;
                        }
                        if !seen_ids.insert(id.clone()) {
                            continue;
                        }
                        let file_name = name.unwrap_or_else(|| id.clone());
                        // Nearest ancestor folder name when available, else
                        // the item's own name.
                        let classification_name =
                            folder.name.as_deref().unwrap_or(file_name.as_str());
                        let category = classify(classification_name);
                        assets.push(Asset {
                            source_ref: id.clone(),
                            id,
                            alt: alt_text(&file_name),
                            name: file_name,
                            category,
                            mime_type,
                        });
                    }
                }
            }

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        for pending in subfolders.into_iter().rev() {
            stack.push(pending);
        }
    }

    debug!(
        assets = assets.len(),
        folders = folders_visited,
        "Aggregated upstream tree"
    );

    Ok(assets)
}

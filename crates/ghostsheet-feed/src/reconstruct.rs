//! Feed reconstruction

use crate::document::{FeedDocument, FeedMeta, RawCell};
use crate::error::{FeedError, FeedOutcome};
use crate::options::ReconstructOptions;
use crate::result::{FeedResult, Items};
use chrono::{DateTime, Utc};
use ghostsheet_core::{coerce, CellPosition, HeaderLabel, HeaderMap};

/// Rebuilds row records from a flat list of cells
///
/// Works in two passes. The first parses every position and collects the
/// header row; the second places the data cells in sheet order (row, then
/// column left to right). Header cells may therefore appear anywhere in the
/// input. When two columns declare the same field name, the rightmost column
/// wins. The output does not depend on cell order except where two cells
/// share a position (the later one wins).
#[derive(Debug, Clone, Copy)]
pub struct FeedReconstructor<'a> {
    options: &'a ReconstructOptions,
}

impl<'a> FeedReconstructor<'a> {
    pub fn new(options: &'a ReconstructOptions) -> Self {
        Self { options }
    }

    /// Reconstruct a decoded document
    pub fn reconstruct_document(&self, document: &FeedDocument) -> FeedOutcome<FeedResult> {
        let cells = document.feed.entries()?;
        self.reconstruct(document.feed.meta(), &cells)
    }

    /// Reconstruct a feed from its metadata and cells
    pub fn reconstruct(&self, meta: FeedMeta, cells: &[RawCell]) -> FeedOutcome<FeedResult> {
        let (headers, data) = self.split_header_row(&meta.id, cells)?;
        let items = self.place_cells(&meta.id, &headers, data)?;

        log::debug!(
            "Reconstructed feed {}: {} cells, {} headers, {} records",
            meta.id,
            cells.len(),
            headers.len(),
            items.present()
        );

        Ok(FeedResult {
            updated: parse_updated(&meta),
            id: meta.id,
            title: meta.title,
            headers,
            items,
        })
    }

    /// First pass: resolve positions, collect header labels
    fn split_header_row<'c>(
        &self,
        feed: &str,
        cells: &'c [RawCell],
    ) -> FeedOutcome<(HeaderMap, Vec<(CellPosition, &'c RawCell)>)> {
        let mut headers = HeaderMap::new();
        let mut data = Vec::with_capacity(cells.len());

        for cell in cells {
            let position = match CellPosition::parse(&cell.position) {
                Ok(position) => position,
                Err(_) if self.options.is_strict() => {
                    return Err(FeedError::UnparseablePosition {
                        feed: feed.to_string(),
                        label: cell.position.clone(),
                    });
                }
                Err(_) => {
                    log::trace!("Feed {feed}: skipping cell with position {:?}", cell.position);
                    continue;
                }
            };

            if position.is_header() {
                let label = HeaderLabel::parse(&cell.content, &self.options.types);
                headers.insert(position.column, label);
            } else {
                data.push((position, cell));
            }
        }

        Ok((headers, data))
    }

    /// Second pass: coerce data cells into their records
    fn place_cells(
        &self,
        feed: &str,
        headers: &HeaderMap,
        mut data: Vec<(CellPosition, &RawCell)>,
    ) -> FeedOutcome<Items> {
        // Stable, so cells sharing a position keep their arrival order
        data.sort_by(|(a, _), (b, _)| sheet_order(a).cmp(&sheet_order(b)));

        let mut items = Items::new();

        for (position, cell) in data {
            let Some(index) = self.options.header_offset.record_index(position.row) else {
                log::trace!("Feed {feed}: skipping metadata cell {position}");
                continue;
            };

            let Some(label) = headers.get(&position.column) else {
                if self.options.is_strict() {
                    return Err(FeedError::UnresolvedColumn {
                        feed: feed.to_string(),
                        position: position.to_string(),
                    });
                }
                log::trace!("Feed {feed}: skipping cell {position} without header");
                continue;
            };

            let value = coerce(&cell.content, label.kind, self.options.nullfill).map_err(|source| {
                FeedError::Coercion {
                    feed: feed.to_string(),
                    position: position.to_string(),
                    source,
                }
            })?;

            items.set(index, &label.name, value);
        }

        Ok(items)
    }
}

/// Row, then column width, then column letters ("Z" before "AA")
fn sheet_order(position: &CellPosition) -> (u32, usize, &str) {
    (position.row, position.column.len(), &position.column)
}

fn parse_updated(meta: &FeedMeta) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(&meta.updated) {
        Ok(updated) => Some(updated.with_timezone(&Utc)),
        Err(e) => {
            log::warn!(
                "Feed {}: invalid updated timestamp {:?}: {e}",
                meta.id,
                meta.updated
            );
            None
        }
    }
}

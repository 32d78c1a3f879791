//! Drive a full run: one table per category, rendered and emitted in order.

use log::{error, info};

use crate::data::{Category, GameRecord, GameSource};
use crate::error::BlasetablesError;
use crate::output::{transform, OutputTarget, Renderer};
use crate::query::{describe, ColumnPlan, ViewOptions};
use crate::Result;

/// A configured view: options, the column plan derived from them, a
/// renderer, and where the output goes.
///
/// The column plan is built once and never modified; each table prunes its
/// own copy.
#[derive(Debug)]
pub struct TableView<R: Renderer> {
    options: ViewOptions,
    plan: ColumnPlan,
    renderer: R,
    target: OutputTarget,
}

impl<R: Renderer> TableView<R> {
    pub fn new(options: ViewOptions, renderer: R, target: OutputTarget) -> Self {
        let plan = ColumnPlan::build(&options);
        Self {
            options,
            plan,
            renderer,
            target,
        }
    }

    pub fn plan(&self) -> &ColumnPlan {
        &self.plan
    }

    /// Caption for a category table under the current options.
    pub fn caption(&self, category: Category) -> String {
        let description = describe(
            category,
            &self.options.seasons,
            self.options.postseason_only,
            &self.options.teams,
        );
        self.renderer.caption(&description)
    }

    /// Render one category table to a string.
    pub fn render_table(&self, category: Category, records: &[GameRecord]) -> Result<String> {
        let table = transform(
            records,
            &self.plan,
            category,
            self.options.result_limit,
            self.renderer.glyphs(),
        )
        .inspect_err(|err| {
            if let BlasetablesError::MissingField { .. } = err {
                error!("columns: {:?}", self.plan.keys());
                error!("rows: {:#?}", records);
            }
        })?;
        Ok(self.renderer.render(&table, &self.caption(category)))
    }

    /// Render and emit every table from `source`. Returns how many tables
    /// were emitted. Stops at the first error.
    pub fn render_all(&self, source: &impl GameSource) -> Result<usize> {
        let tables = source.parse()?;
        for (category, records) in &tables {
            let rendered = self.render_table(*category, records)?;
            self.target.emit(&rendered)?;
            info!("emitted {} table ({} games)", category, records.len());
        }
        Ok(tables.len())
    }
}

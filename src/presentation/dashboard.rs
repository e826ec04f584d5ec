use crate::comparison::engine::{ComparisonEngine, ComparisonResult};
use crate::core::format::{NumberFormat, Rendered};
use crate::core::indicator::{DerivedKey, Indicator};
use crate::core::record::DatasetCatalog;
use crate::core::year::{EngineConfig, Year};
use crate::metrics::engine::{DerivedMetric, MetricsEngine};
use crate::metrics::snapshot::Snapshot;
use crate::presentation::report::{ComparisonReport, ReportRow};
use crate::presentation::sink::{compare_cell_id, value_cell_id, CellClass, PresentationSink, Side};

/// Everything rendered for one selected year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearView {
    pub snapshot: Snapshot,
    pub metrics: Vec<DerivedMetric>,
    pub direct: Vec<(Indicator, Rendered)>,
    pub derived: Vec<(DerivedKey, Rendered)>,
}

impl YearView {
    pub fn year(&self) -> Year {
        self.snapshot.year()
    }

    pub fn direct_value(&self, indicator: Indicator) -> Rendered {
        self.direct
            .iter()
            .find(|(i, _)| *i == indicator)
            .map(|(_, r)| r.clone())
            .unwrap_or_else(Rendered::no_data)
    }

    pub fn derived_value(&self, key: DerivedKey) -> Rendered {
        self.derived
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, r)| r.clone())
            .unwrap_or_else(Rendered::no_data)
    }
}

/// Two-year comparison driven by year selections.
///
/// Each selection recomputes its side from scratch (resolve, derive,
/// render), writes it to the sink, then refreshes every comparison cell.
pub struct Dashboard {
    catalog: DatasetCatalog,
    engine: MetricsEngine,
    views: [Option<YearView>; 2],
}

impl Dashboard {
    pub fn new(catalog: DatasetCatalog, config: &EngineConfig) -> Self {
        Self::with_engine(catalog, MetricsEngine::from_config(config))
    }

    pub fn with_engine(catalog: DatasetCatalog, engine: MetricsEngine) -> Self {
        Self {
            catalog,
            engine,
            views: [None, None],
        }
    }

    pub fn catalog(&self) -> &DatasetCatalog {
        &self.catalog
    }

    pub fn view(&self, side: Side) -> Option<&YearView> {
        self.views[side.index()].as_ref()
    }

    /// Resolve and render one year without touching any side.
    pub fn build_view(&self, year: Year) -> YearView {
        let snapshot = self.engine.compute_snapshot(&self.catalog, year);
        let metrics = self.engine.compute_derived_metrics(&snapshot);
        let direct = Indicator::ALL
            .into_iter()
            .map(|indicator| (indicator, snapshot.rendered(indicator)))
            .collect();
        let derived = metrics.iter().map(|m| (m.key, m.rendered())).collect();
        YearView {
            snapshot,
            metrics,
            direct,
            derived,
        }
    }

    /// Render both sides, then the comparisons.
    pub fn initialize(&mut self, year_a: Year, year_b: Year, sink: &mut impl PresentationSink) {
        self.render_side(Side::A, year_a, sink);
        self.render_side(Side::B, year_b, sink);
        self.update_comparisons(sink);
    }

    /// Handle a new selection for one side.
    pub fn select_year(&mut self, side: Side, year: Year, sink: &mut impl PresentationSink) {
        self.render_side(side, year, sink);
        self.update_comparisons(sink);
    }

    fn render_side(&mut self, side: Side, year: Year, sink: &mut impl PresentationSink) {
        log::debug!("rendering year {} for side {}", year, side);
        let view = self.build_view(year);
        for (indicator, rendered) in &view.direct {
            sink.set_cell_text(&value_cell_id(side, indicator.metric_name()), &rendered.text);
        }
        for (key, rendered) in &view.derived {
            sink.set_cell_text(&value_cell_id(side, &key.metric_name()), &rendered.text);
        }
        self.views[side.index()] = Some(view);
    }

    fn side_direct(&self, side: Side, indicator: Indicator) -> Rendered {
        self.view(side)
            .map(|v| v.direct_value(indicator))
            .unwrap_or_else(Rendered::no_data)
    }

    fn side_derived(&self, side: Side, key: DerivedKey) -> Rendered {
        self.view(side)
            .map(|v| v.derived_value(key))
            .unwrap_or_else(Rendered::no_data)
    }

    /// Comparisons of the six raw indicators.
    pub fn direct_comparisons(&self) -> Vec<(Indicator, ComparisonResult)> {
        Indicator::ALL
            .into_iter()
            .map(|indicator| {
                let result = ComparisonEngine::compare_direct(
                    &self.side_direct(Side::A, indicator),
                    &self.side_direct(Side::B, indicator),
                    indicator.format() == NumberFormat::Cents,
                );
                (indicator, result)
            })
            .collect()
    }

    /// Comparisons of the nine hours-of-work metrics.
    pub fn derived_comparisons(&self) -> Vec<(DerivedKey, ComparisonResult)> {
        DerivedKey::all()
            .map(|key| {
                let result = ComparisonEngine::compare_derived(
                    &self.side_derived(Side::A, key),
                    &self.side_derived(Side::B, key),
                );
                (key, result)
            })
            .collect()
    }

    fn update_comparisons(&self, sink: &mut impl PresentationSink) {
        for (indicator, result) in self.direct_comparisons() {
            sink.set_cell_text(&compare_cell_id(indicator.metric_name()), &result.text);
        }
        for (key, result) in self.derived_comparisons() {
            let id = compare_cell_id(&key.metric_name());
            sink.set_cell_text(&id, &result.text);
            sink.set_cell_class(&id, CellClass::from(result.classification));
        }
    }

    /// Summary of the current state of both sides.
    pub fn report(&self) -> ComparisonReport {
        let direct = self
            .direct_comparisons()
            .into_iter()
            .map(|(indicator, result)| ReportRow {
                metric: indicator.metric_name().to_string(),
                label: indicator.label().to_string(),
                year_a: self.side_direct(Side::A, indicator).text,
                year_b: self.side_direct(Side::B, indicator).text,
                change: result.text,
                direction: result.classification,
            })
            .collect();
        let derived = self
            .derived_comparisons()
            .into_iter()
            .map(|(key, result)| ReportRow {
                metric: key.metric_name(),
                label: key.label(),
                year_a: self.side_derived(Side::A, key).text,
                year_b: self.side_derived(Side::B, key).text,
                change: result.text,
                direction: result.classification,
            })
            .collect();
        ComparisonReport {
            year_a: self.view(Side::A).map(|v| v.year()),
            year_b: self.view(Side::B).map(|v| v.year()),
            direct,
            derived,
        }
    }
}

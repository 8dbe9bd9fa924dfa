/// A single documentation page: display title, navigation weight among
/// siblings (not required unique), and body text (may be empty).
#[derive(Eq, PartialEq, Debug)]
pub struct Page {
    pub title: &'static str,
    pub weight: i64,
    pub body: &'static str,
}

/// A named group of pages, rendered as one directory under the content root.
/// Pages keep their definition order; the first is the section's `_index.md`.
#[derive(Eq, PartialEq, Debug)]
pub struct Section {
    pub id: &'static str,
    pub pages: &'static [(&'static str, Page)],
}

pub const fn page(title: &'static str, weight: i64, body: &'static str) -> Page {
    Page {
        title,
        weight,
        body,
    }
}

/// the whole site, in display order
pub const SECTIONS: &[Section] = &[
    Section {
        id: "introduction",
        pages: &[
            (
                "_index.md",
                page("Introduction", 1, "Welcome to the SHM documentation."),
            ),
            (
                "what-is-shm.md",
                page("What is SHM?", 1, "Basics of Structural Health Monitoring."),
            ),
            (
                "project-overview.md",
                page(
                    "Project Overview",
                    2,
                    "Overview of the SHM–Mongo–DuckDB project.",
                ),
            ),
        ],
    },
    Section {
        id: "setup",
        pages: &[
            (
                "_index.md",
                page("Setup", 2, "System setup for Ubuntu and Windows."),
            ),
            (
                "windows.md",
                page("Windows Setup", 1, "Instructions for Windows environment."),
            ),
            (
                "ubuntu.md",
                page("Ubuntu Setup", 2, "Instructions for Ubuntu environment."),
            ),
            ("tools.md", page("Tools Needed", 3, "Required software tools.")),
        ],
    },
    Section {
        id: "mongodb",
        pages: &[
            ("_index.md", page("MongoDB", 3, "Working with MongoDB data.")),
            (
                "export.md",
                page("Exporting Data", 1, "How to export data from MongoDB."),
            ),
            (
                "query.md",
                page("Querying Data", 2, "Query examples and basics."),
            ),
        ],
    },
    Section {
        id: "duckdb",
        pages: &[
            (
                "_index.md",
                page("DuckDB", 4, "Working with DuckDB and Parquet."),
            ),
            (
                "convert.md",
                page(
                    "Convert to Parquet",
                    1,
                    "Converting Mongo JSON/BSON to Parquet.",
                ),
            ),
            (
                "query-parquet.md",
                page("Query Parquet", 2, "Querying Parquet files with DuckDB."),
            ),
        ],
    },
    Section {
        id: "datasets",
        pages: &[
            (
                "_index.md",
                page("Datasets", 5, "Dataset structure and download info."),
            ),
            (
                "structure.md",
                page(
                    "Dataset Structure",
                    1,
                    "Overview of monthly dataset contents.",
                ),
            ),
            (
                "monthly-overview.md",
                page("Monthly Overview", 2, "How data changes month-to-month."),
            ),
        ],
    },
    Section {
        id: "examples",
        pages: &[
            (
                "_index.md",
                page("Examples", 6, "Examples of analysis and visualizations."),
            ),
            (
                "spectrograms.md",
                page("Spectrograms", 1, "Plotting spectrograms from signals."),
            ),
            (
                "vibration-analysis.md",
                page(
                    "Vibration Analysis",
                    2,
                    "Basic vibration analysis workflow.",
                ),
            ),
        ],
    },
];

mod tests;

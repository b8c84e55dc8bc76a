use grayconv as gc;

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum EngineMode {
    /// Sequential baseline on the calling thread
    Seq,
    /// One work unit per output row
    Row,
    /// One work unit per output column
    Col,
    /// Square tiles consumed by a caller-sized worker pool
    Grid,
    /// One work unit per output pixel (pathological contrast point)
    Pix,
}

impl From<EngineMode> for gc::Mode {
    fn from(mode: EngineMode) -> Self {
        match mode {
            EngineMode::Seq => gc::Mode::Seq,
            EngineMode::Row => gc::Mode::Row,
            EngineMode::Col => gc::Mode::Col,
            EngineMode::Grid => gc::Mode::Grid,
            EngineMode::Pix => gc::Mode::Pix,
        }
    }
}

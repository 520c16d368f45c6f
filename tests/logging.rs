//! Log records emitted on the fatal conversion path and on limit rejection.

use std::panic;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use zenraster::{MultiChannelRaster, Raster, RasterLimits, Rect};

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if record.target().starts_with("zenraster") {
            self.records
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn take_records() -> Vec<(Level, String)> {
    std::mem::take(&mut *LOGGER.records.lock().unwrap())
}

// One test per binary: the logger is process-global.
#[test]
fn records_limit_rejection_and_fatal_conversion() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let limits = RasterLimits::none().with_max_channels(2);
    let err = MultiChannelRaster::with_limits(Rect::from_size(4, 4), 3, &limits);
    assert!(err.is_err());
    let records = take_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Level::Debug);
    assert!(records[0].1.contains("rejected 3-channel raster"));
    assert!(records[0].1.contains("channel count 3 exceeds limit 2"));

    // Accepted constructions stay quiet.
    MultiChannelRaster::with_limits(Rect::from_size(4, 4), 2, &limits).unwrap();
    assert!(take_records().is_empty());

    let raster = MultiChannelRaster::new(Rect::from_size(2, 2), 6).unwrap();
    assert!(panic::catch_unwind(|| raster.rgba_at(0, 0)).is_err());
    let records = take_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, Level::Error);
    assert_eq!(records[0].1, "cannot convert 6-channel samples to RGBA");
}

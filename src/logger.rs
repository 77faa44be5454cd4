// src/logger.rs
//! `log` クレートのマクロをブラウザのコンソールに流すロガーだよ。
//! error は console.error、warn は console.warn、それ以外は console.log に出す。

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    fn console_error(s: &str);
}

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    /// `[INFO pyramid_solitaire::app::stock_handler] Dealt ...` の形にする。
    pub fn format_record(level: Level, target: &str, message: &str) -> String {
        format!("[{} {}] {}", level, target, message)
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format_record(record.level(), record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => console_error(&line),
            Level::Warn => console_warn(&line),
            _ => console_log(&line),
        }
    }

    fn flush(&self) {}
}

/// ロガーを登録してレベルを設定する。2回目以降は登録に失敗するけど、レベルは更新するよ。
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    let result = log::set_logger(&LOGGER);
    log::set_max_level(level);
    result
}

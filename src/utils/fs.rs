//! IO helper: JSON文件读写

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde_json::Value;

use crate::model::job::FanyiError;

/// 从文件读取JSON数据
pub fn read_json_file(p: &Path) -> Result<Value, FanyiError> {
    let f = File::open(p)?;
    let rdr = BufReader::new(f);
    let v: Value = serde_json::from_reader(rdr)?;
    Ok(v)
}

/// 将JSON数据保存到文件（两空格缩进，非ASCII字符原样输出，覆盖已有内容）
pub fn write_json_file(p: &Path, value: &Value) -> Result<(), FanyiError> {
    let f = File::create(p)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, value)?;
    w.flush()?;
    Ok(())
}

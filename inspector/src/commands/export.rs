use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::Result;
use log::info;
use mplib_parser::read_mplib;
use project_instance::ProjectInstance;

pub fn export(instance_file: PathBuf, output: Option<PathBuf>, pretty: bool) -> Result<()> {
    let instance = read_mplib(&instance_file)?;

    match output {
        Some(path) => {
            let writer = BufWriter::new(File::create(&path)?);
            write_json(writer, &instance, pretty)?;
            info!("Wrote instance JSON to: {:?}", path);
        }
        None => write_json(io::stdout().lock(), &instance, pretty)?,
    }

    Ok(())
}

fn write_json<W: Write>(mut writer: W, instance: &ProjectInstance, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, instance)?;
    } else {
        serde_json::to_writer(&mut writer, instance)?;
    }

    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

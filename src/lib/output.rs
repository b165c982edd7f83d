use super::geojson::Entity;
use serde_json::to_string;
use std::io::{self, Write};

pub trait Output {
    fn write_geojson(&self, writer: &mut dyn Write) -> io::Result<()>;
}

impl Output for Entity {
    fn write_geojson(&self, writer: &mut dyn Write) -> io::Result<()> {
        let json = to_string(self)?;
        writeln!(writer, "{}", json)?;
        Ok(())
    }
}

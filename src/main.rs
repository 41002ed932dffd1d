use std::fs::File;
use std::io::{self, BufReader, Read};

use schematic::cli::{error_context, Bencher, Mode, Opts};
use schematic::prelude::*;

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let name = opts.input_name();
    let mut o = opts.output();

    match opts.mode {
        Mode::Default => {
            let totals = match opts.path() {
                Some(path) => {
                    let file = File::open(path).with_context(|| anyhow!("{name}"))?;
                    schematic::scan(Reader::new(BufReader::new(file)))
                }
                None => schematic::scan(Reader::new(io::stdin().lock())),
            };

            let totals = totals.map_err(|error| error_context(&name, error))?;
            log::debug!("{name}: {totals}");
            o.totals(&totals)?;
        }
        Mode::Bench => {
            let mut data = Vec::with_capacity(4096);

            match opts.path() {
                Some(path) => {
                    let mut file = File::open(path).with_context(|| anyhow!("{name}"))?;
                    file.read_to_end(&mut data)?;
                }
                None => {
                    io::stdin().lock().read_to_end(&mut data)?;
                }
            }

            let mut b = Bencher::new();

            b.iter(&opts, &mut o, || {
                schematic::scan(Lines::new(&data)).map_err(|error| error_context(&name, error))
            })?;
        }
    }

    Ok(())
}

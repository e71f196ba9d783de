use clap::Parser;
use tag_kind_mapping_generator::emit;
use xtask::args::GenerateArgs;
use xtask::util::{self, OutputTarget};

fn main() {
    try_main().unwrap_or_else(|e| {
        eprintln!("{:#}", e);
        std::process::exit(1);
    });
}

fn try_main() -> anyhow::Result<()> {
    let args = GenerateArgs::parse();

    let _ = {
        use log::LevelFilter::*;

        env_logger::builder()
            .filter_level(Warn)
            .filter_module("xtask", Info)
            .filter_module("tag_kind_mapping_generator", Info)
            .filter_module("gen_tag_kind_mappings", Info)
            .parse_default_env()
            .try_init()
    };

    let records = util::load_records(args.input.as_deref())?;
    util::warn_duplicates(&records);

    let options = args.mapping_options();
    let outcomes = OutputTarget::new(args.output.as_deref())
        .write_with(|output| Ok(emit(&records, &options, output)?))?;

    for outcome in outcomes {
        if let Some(line) = outcome.aborted_at {
            log::warn!(
                "{} mapping is incomplete: stopped at malformed line {line}",
                outcome.direction
            );
        }
    }

    Ok(())
}

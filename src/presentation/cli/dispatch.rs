//! Command dispatch
//!
//! Opens the device a command needs, checks the confirmation fingerprint
//! before anything destructive, runs the use case and reports the result.
//! The bad block list of `scan` and `burnin` is written even when the run
//! stops early.

use super::commands::{self, Cli, Commands, DeviceArgs, ListArgs, RangeArgs, RwType};
use super::progress::ProgressReporter;
use super::prompts::TerminalPrompter;
use crate::application::dto::{FixOutcome, FixReport, LoopReport, OperationOptions};
use crate::application::{
    confirm_device, BurnInUseCase, DeviceReport, FindFilesUseCase, FixBlocksUseCase,
    ScanDeviceUseCase, SecurityEraseUseCase, WriteUncorrectableUseCase,
};
use crate::core::{AppError, ErrorCode, OperationContext, Result};
use crate::domain::entities::{format_hms, BadBlockList, DeviceIdentity, UncorrectableMode};
use crate::domain::repositories::{BlockTransport, TransportMode};
use crate::domain::services::device_fingerprint;
use crate::infrastructure::block_device::LinuxBlockDevice;
use crate::infrastructure::file_systems::{backing_device, FiemapExtentSource};
use crate::infrastructure::persistence::{default_path, BadBlockFile};
use console::style;
use std::path::Path;
use tracing::{info, warn};

/// How a device is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Read,
    ReadWrite { exclusive: bool },
}

/// Status output that `--quiet` silences
#[derive(Debug, Clone, Copy)]
struct Output {
    quiet: bool,
}

impl Output {
    fn line(&self, text: impl std::fmt::Display) {
        if !self.quiet {
            println!("{}", text);
        }
    }
}

/// Runs the parsed command line
pub fn run(cli: &Cli, ctx: &OperationContext) -> Result<()> {
    let out = Output { quiet: cli.quiet };
    let access = access_for(&cli.command);

    match &cli.command {
        Commands::Info { device, json } => show_info(device, *json),
        Commands::Captcha { path } => captcha(path),
        Commands::Scan {
            device,
            range,
            list,
        } => scan(device, range, list, ctx, out),
        Commands::Fix {
            device,
            retries,
            input,
        } => fix(device, access, *retries, input.as_deref(), ctx, out),
        Commands::FixFile {
            file,
            rwtype,
            captcha,
            retries,
            ..
        } => fix_file(
            file,
            *rwtype,
            access,
            captcha.as_deref(),
            *retries,
            ctx,
            out,
        ),
        Commands::Burnin {
            device,
            range,
            list,
            retries,
        } => burnin(device, access, range, list, *retries, ctx, out),
        Commands::FindFiles { path, input } => find_files(path, input.as_deref()),
        Commands::DumpFiles { path } => dump_files(path),
        Commands::FileBlocks { file } => file_blocks(file),
        Commands::WriteUncorrectable {
            device,
            mode,
            input,
        } => write_uncorrectable(
            device,
            access,
            (*mode).into(),
            input.as_deref(),
            ctx,
            out,
        ),
        Commands::SecurityErase { device, enhanced } => {
            security_erase(device, access, *enhanced, out)
        }
    }
}

fn open_device(path: &Path, rwtype: RwType, access: Access) -> Result<LinuxBlockDevice> {
    let opened = match access {
        Access::Read => LinuxBlockDevice::open_read(path),
        Access::ReadWrite { exclusive } => LinuxBlockDevice::open_read_write(path, exclusive),
    };
    let mut device =
        opened.map_err(|code| AppError::opening_device(code, path.display().to_string()))?;

    let mode = TransportMode::from(rwtype);
    if mode == TransportMode::Ata && device.identity().is_none() {
        return Err(AppError::identifying_device(
            ErrorCode::Os(libc::EOPNOTSUPP),
            format!("{} does not answer ATA commands", path.display()),
        ));
    }
    device.set_mode(mode);

    Ok(device)
}

/// Runs `f` on an open device and closes it
///
/// An error from `f` wins over an error from closing.
fn with_device<F>(mut device: LinuxBlockDevice, f: F) -> Result<()>
where
    F: FnOnce(&mut LinuxBlockDevice) -> Result<()>,
{
    let result = f(&mut device);
    let path = device.path().display().to_string();
    let closed = device
        .close()
        .map_err(|code| AppError::closing_device(code, path));
    result.and(closed)
}

/// How `command` opens its device
///
/// Commands that write blocks open read-write, exclusively unless
/// `--force` is given. The erase sequence only sends passthrough
/// commands and opens read-only.
fn access_for(command: &Commands) -> Access {
    match command {
        Commands::Fix { device, .. }
        | Commands::Burnin { device, .. }
        | Commands::WriteUncorrectable { device, .. } => Access::ReadWrite {
            exclusive: !device.force,
        },
        Commands::FixFile { force, .. } => Access::ReadWrite { exclusive: !*force },
        _ => Access::Read,
    }
}

fn fingerprint_of<T: BlockTransport + ?Sized>(device: &T) -> String {
    device_fingerprint(device.identity(), &device.geometry())
}

fn list_file<T: BlockTransport + ?Sized>(given: Option<&Path>, device: &T) -> BadBlockFile {
    match given {
        Some(path) => BadBlockFile::new(path),
        None => BadBlockFile::new(default_path(&fingerprint_of(device))),
    }
}

/// Reads a list that must exist
fn require_list(file: &BadBlockFile) -> Result<BadBlockList> {
    file.read()
        .map_err(|code| AppError::reading_bad_blocks_file(code, file.path().display().to_string()))
}

/// Reads a list that may not exist yet
fn import_list(file: &BadBlockFile) -> Result<BadBlockList> {
    match file.read() {
        Ok(list) => {
            info!("Imported {} bad blocks from {}", list.len(), file.path().display());
            Ok(list)
        }
        Err(ErrorCode::Os(libc::ENOENT)) => {
            warn!("{} does not exist; starting empty", file.path().display());
            Ok(BadBlockList::new())
        }
        Err(code) => Err(AppError::reading_bad_blocks_file(
            code,
            file.path().display().to_string(),
        )),
    }
}

fn save_list(file: &BadBlockFile, list: &BadBlockList) -> Result<()> {
    file.write(list.as_slice())
        .map_err(|code| AppError::writing_bad_blocks_file(code, file.path().display().to_string()))
}

fn show_info(args: &DeviceArgs, json: bool) -> Result<()> {
    let device = open_device(&args.device, args.rwtype, Access::Read)?;

    with_device(device, |device| {
        let report = DeviceReport::from_device(&args.device, &*device);
        if json {
            let text = serde_json::to_string_pretty(&report).map_err(|err| {
                AppError::runtime(ErrorCode::Os(libc::EINVAL), format!("json: {}", err))
            })?;
            println!("{}", text);
        } else {
            print_report(&report);
        }
        Ok(())
    })
}

fn print_report(report: &DeviceReport) {
    println!("{}", style(report.path.display()).bold());
    if let Some(identity) = &report.identity {
        print_identity(identity);
    }

    println!("{}", style("Geometry").cyan().bold());
    println!("  {:<24} {}", "Logical block size:", report.logical_block_size);
    println!("  {:<24} {}", "Physical block size:", report.physical_block_size);
    println!("  {:<24} {}", "Stepping:", report.stepping);
    println!("  {:<24} {}", "Logical blocks:", report.logical_block_count);
    println!("  {:<24} {}", "Physical blocks:", report.physical_block_count);
    println!(
        "  {:<24} {} ({} / {})",
        "Size:", report.size_in_bytes, report.size_base2, report.size_base10
    );
    println!("  {:<24} {}", "Captcha:", style(&report.fingerprint).green());
}

fn print_identity(identity: &DeviceIdentity) {
    let flag = |value: bool| if value { "yes" } else { "no" };

    println!("{}", style("Identity").cyan().bold());
    println!("  {:<24} {}", "Serial number:", identity.serial_number);
    println!("  {:<24} {}", "Firmware revision:", identity.firmware_revision);
    println!("  {:<24} {}", "Model number:", identity.model_number);
    println!("  {:<24} {}", "Rotation:", identity.rotation());
    println!("  {:<24} {}", "Form factor:", identity.form_factor_name());
    println!(
        "  {:<24} {}/{}",
        "SMART (supported/on):",
        flag(identity.smart_supported),
        flag(identity.smart_enabled)
    );
    println!(
        "  {:<24} {}",
        "SATA generations:",
        [
            (identity.sata_gen1, "1"),
            (identity.sata_gen2, "2"),
            (identity.sata_gen3, "3"),
        ]
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(",")
    );
    println!("  {:<24} {}", "TRIM:", flag(identity.trim_supported));
    println!(
        "  {:<24} {}",
        "Write uncorrectable:",
        flag(identity.write_uncorrectable_ext)
    );
    println!(
        "  {:<24} block erase {}, overwrite {}, crypto scramble {}",
        "Sanitize:",
        flag(identity.block_erase),
        flag(identity.overwrite),
        flag(identity.crypto_scramble)
    );

    println!("{}", style("Security").cyan().bold());
    println!("  {:<24} {}", "Supported:", flag(identity.security_supported));
    println!("  {:<24} {}", "Enabled:", flag(identity.security_enabled));
    println!("  {:<24} {}", "Locked:", flag(identity.security_locked));
    println!("  {:<24} {}", "Frozen:", flag(identity.security_frozen));
    println!("  {:<24} {}", "Count expired:", flag(identity.security_count_expired));
    println!(
        "  {:<24} {}",
        "Enhanced erase:",
        flag(identity.security_enhanced_erase_supported)
    );
    println!(
        "  {:<24} {} min normal, {} min enhanced",
        "Erase time:",
        identity.security_normal_erase_time,
        identity.security_enhanced_erase_time
    );
}

fn captcha(path: &Path) -> Result<()> {
    let device_path = backing_device(path)
        .map_err(|code| AppError::opening_device(code, path.display().to_string()))?;
    if device_path != path {
        info!("{} is on {}", path.display(), device_path.display());
    }

    let device = open_device(&device_path, RwType::Os, Access::Read)?;
    with_device(device, |device| {
        println!("{}", fingerprint_of(&*device));
        Ok(())
    })
}

fn print_loop_summary(out: Output, name: &str, report: &LoopReport, total_bad: usize) {
    out.line(format!(
        "{} {}: blocks {} - {} (stepping {}), stopped at {}",
        name, report.stop, report.start_block, report.end_block, report.stepping, report.next_block
    ));
    out.line(format!(
        "{} new bad blocks, {} total, elapsed {}",
        report.new_bad_blocks,
        total_bad,
        format_hms(report.elapsed)
    ));
}

fn scan(
    args: &DeviceArgs,
    range: &RangeArgs,
    list: &ListArgs,
    ctx: &OperationContext,
    out: Output,
) -> Result<()> {
    let options = commands::operation_options(range, 0)?;
    let device = open_device(&args.device, args.rwtype, Access::Read)?;

    with_device(device, |device| {
        let input = list_file(list.input.as_deref(), &*device);
        let output = list_file(list.output.as_deref(), &*device);
        let mut bad_blocks = import_list(&input)?;

        let reporter = ProgressReporter::new(options.range(&device.geometry()).len(), out.quiet);
        let callback = reporter.callback();
        let result =
            ScanDeviceUseCase::new(options).execute(device, &mut bad_blocks, ctx, Some(&callback));
        reporter.finish();

        let saved = save_list(&output, &bad_blocks);
        let report = result.map_err(|code| AppError::runtime(code, "scan stopped"))?;
        saved?;

        print_loop_summary(out, "Scan", &report, bad_blocks.len());
        Ok(())
    })
}

fn print_fix_outcome(out: Output, outcome: &FixOutcome) {
    out.line(format!(
        "{}: read {}, write {}",
        outcome.block, outcome.read, outcome.write
    ));
}

fn print_fix_summary(out: Output, report: &FixReport) {
    if report.cancelled {
        out.line("Fix cancelled");
    }
    out.line(format!(
        "{} blocks processed: {} unreadable, {} unwritable",
        report.processed, report.read_failures, report.write_failures
    ));
}

fn fix(
    args: &DeviceArgs,
    access: Access,
    retries: Option<u32>,
    input: Option<&Path>,
    ctx: &OperationContext,
    out: Output,
) -> Result<()> {
    let retries = commands::retries(retries)?;
    let captcha = args.require_captcha()?;
    let device = open_device(&args.device, args.rwtype, access)?;

    with_device(device, |device| {
        confirm_device(&*device, captcha)?;
        let blocks = require_list(&list_file(input, &*device))?;

        let options = OperationOptions::new().with_retries(retries);
        let report = FixBlocksUseCase::new(options).execute(device, blocks.as_slice(), ctx, |o| {
            print_fix_outcome(out, o)
        });
        device
            .sync()
            .map_err(|code| AppError::runtime(code, "sync failed"))?;

        print_fix_summary(out, &report);
        Ok(())
    })
}

fn fix_file(
    file: &Path,
    rwtype: RwType,
    access: Access,
    captcha: Option<&str>,
    retries: Option<u32>,
    ctx: &OperationContext,
    out: Output,
) -> Result<()> {
    let retries = commands::retries(retries)?;
    let captcha = captcha.ok_or_else(|| AppError::argument_required("captcha"))?;
    let device_path = backing_device(file)
        .map_err(|code| AppError::opening_file(code, file.display().to_string()))?;
    let device = open_device(&device_path, rwtype, access)?;

    with_device(device, |device| {
        confirm_device(&*device, captcha)?;

        let options = OperationOptions::new().with_retries(retries);
        let report = FixBlocksUseCase::new(options)
            .execute_for_file(device, &FiemapExtentSource, file, ctx, |o| {
                print_fix_outcome(out, o)
            })
            .map_err(|code| AppError::opening_file(code, file.display().to_string()))?;
        device
            .sync()
            .map_err(|code| AppError::runtime(code, "sync failed"))?;

        print_fix_summary(out, &report);
        Ok(())
    })
}

fn burnin(
    args: &DeviceArgs,
    access: Access,
    range: &RangeArgs,
    list: &ListArgs,
    retries: Option<u32>,
    ctx: &OperationContext,
    out: Output,
) -> Result<()> {
    let retries = commands::retries(retries)?;
    let options = commands::operation_options(range, retries)?;
    let captcha = args.require_captcha()?;
    let device = open_device(&args.device, args.rwtype, access)?;

    with_device(device, |device| {
        confirm_device(&*device, captcha)?;
        let input = list_file(list.input.as_deref(), &*device);
        let output = list_file(list.output.as_deref(), &*device);
        let mut bad_blocks = import_list(&input)?;

        let reporter = ProgressReporter::new(options.range(&device.geometry()).len(), out.quiet);
        let callback = reporter.callback();
        let result =
            BurnInUseCase::new(options).execute(device, &mut bad_blocks, ctx, Some(&callback));
        reporter.finish();

        let saved = save_list(&output, &bad_blocks);
        let report = result.map_err(|code| AppError::runtime(code, "burn-in stopped"))?;
        saved?;
        device
            .sync()
            .map_err(|code| AppError::runtime(code, "sync failed"))?;

        print_loop_summary(out, "Burn-in", &report, bad_blocks.len());
        Ok(())
    })
}

fn read_input(input: Option<&Path>) -> Result<BadBlockList> {
    let input = input.ok_or_else(|| AppError::argument_required("input"))?;
    require_list(&BadBlockFile::new(input))
}

fn find_files(root: &Path, input: Option<&Path>) -> Result<()> {
    let blocks = read_input(input)?;
    let owners = FindFilesUseCase::new(FiemapExtentSource)
        .find(root, blocks.as_slice())
        .map_err(|code| AppError::opening_file(code, root.display().to_string()))?;

    for owner in owners {
        println!("{}", owner);
    }
    Ok(())
}

fn dump_files(root: &Path) -> Result<()> {
    let lines = FindFilesUseCase::new(FiemapExtentSource)
        .dump(root)
        .map_err(|code| AppError::opening_file(code, root.display().to_string()))?;

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn file_blocks(file: &Path) -> Result<()> {
    let blocks = FindFilesUseCase::new(FiemapExtentSource)
        .file_blocks(file)
        .map_err(|code| AppError::opening_file(code, file.display().to_string()))?;

    for block in blocks {
        println!("{}", block);
    }
    Ok(())
}

fn write_uncorrectable(
    args: &DeviceArgs,
    access: Access,
    mode: UncorrectableMode,
    input: Option<&Path>,
    ctx: &OperationContext,
    out: Output,
) -> Result<()> {
    let captcha = args.require_captcha()?;
    let device = open_device(&args.device, args.rwtype, access)?;

    with_device(device, |device| {
        confirm_device(&*device, captcha)?;
        let blocks = require_list(&list_file(input, &*device))?;

        let report = WriteUncorrectableUseCase::new(mode).execute(device, blocks.as_slice(), ctx);
        for (block, code) in &report.failed {
            out.line(format!("{}: {} failed [{}]", block, mode, code));
        }
        if report.cancelled {
            out.line("Write uncorrectable cancelled");
        }
        out.line(format!(
            "{} blocks marked {}, {} failed",
            report.succeeded,
            mode,
            report.failed.len()
        ));
        Ok(())
    })
}

fn security_erase(args: &DeviceArgs, access: Access, enhanced: bool, out: Output) -> Result<()> {
    let captcha = args.require_captcha()?;
    let device = open_device(&args.device, args.rwtype, access)?;

    with_device(device, |device| {
        confirm_device(&*device, captcha)?;

        let mut prompter = TerminalPrompter::new();
        let estimate = SecurityEraseUseCase::new(enhanced).execute(
            device,
            &mut prompter,
            &mut rand::thread_rng(),
        )?;

        out.line(format!(
            "Security erase finished (allowed {})",
            format_hms(estimate.timeout())
        ));
        Ok(())
    })
}

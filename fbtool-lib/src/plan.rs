//! The flash plan data model.
//!
//! A plan is data, not code: a named, ordered list of steps consumed by one
//! generic interpreter (`run_plan`). Plans are hand-authored per
//! device/firmware release and never mutated at run time.

use std::path::Path;

use strum::{Display, EnumString};

/// Which of the two authored plan flavors to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum PlanVariant {
    /// Flash every image, then wipe user data and the scratch partitions.
    #[strum(serialize = "full_wipe")]
    #[cfg_attr(feature = "cli", clap(name = "full_wipe"))]
    FullWipe,
    /// Flash every image but keep user data intact.
    #[strum(serialize = "dirty")]
    #[cfg_attr(feature = "cli", clap(name = "dirty"))]
    Dirty,
}

/// One step of a flash plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashStep {
    /// Select which A/B slot boots next. Precedes all image writes.
    SetActive { slot: &'static str },
    /// Write `image` (a file name under the images directory) to `partition`.
    Flash {
        partition: &'static str,
        image: &'static str,
    },
    /// Erase `partition` in its entirety.
    Erase { partition: &'static str },
    /// Vendor-specific OEM command, passed through verbatim.
    Oem { args: &'static [&'static str] },
    /// Reboot the device out of the bootloader.
    Reboot,
}

impl FlashStep {
    /// Argument vector for one invocation of the external tool.
    pub fn to_args(&self, images_dir: &Path) -> Vec<String> {
        match self {
            FlashStep::SetActive { slot } => vec!["set_active".into(), (*slot).into()],
            FlashStep::Flash { partition, image } => vec![
                "flash".into(),
                (*partition).into(),
                images_dir.join(image).display().to_string(),
            ],
            FlashStep::Erase { partition } => vec!["erase".into(), (*partition).into()],
            FlashStep::Oem { args } => std::iter::once("oem".to_string())
                .chain(args.iter().map(|arg| arg.to_string()))
                .collect(),
            FlashStep::Reboot => vec!["reboot".into()],
        }
    }

    /// Short human-readable form, used in progress output and reports.
    pub fn describe(&self) -> String {
        match self {
            FlashStep::SetActive { slot } => format!("set_active {slot}"),
            FlashStep::Flash { partition, .. } => format!("flash {partition}"),
            FlashStep::Erase { partition } => format!("erase {partition}"),
            FlashStep::Oem { args } => format!("oem {}", args.join(" ")),
            FlashStep::Reboot => "reboot".to_string(),
        }
    }

    /// File name of the image this step writes, if it writes one.
    pub fn image(&self) -> Option<&'static str> {
        match self {
            FlashStep::Flash { image, .. } => Some(image),
            _ => None,
        }
    }
}

/// A named, ordered flash plan.
#[derive(Debug, Clone)]
pub struct FlashPlan {
    pub name: &'static str,
    pub steps: Vec<FlashStep>,
}

impl FlashPlan {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of (flash, erase) steps, for the pre-run summary.
    pub fn counts(&self) -> (usize, usize) {
        let flashes = self
            .steps
            .iter()
            .filter(|step| matches!(step, FlashStep::Flash { .. }))
            .count();
        let erases = self
            .steps
            .iter()
            .filter(|step| matches!(step, FlashStep::Erase { .. }))
            .count();
        (flashes, erases)
    }

    /// Image file names referenced by this plan, in step order.
    pub fn images(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().filter_map(FlashStep::image)
    }
}

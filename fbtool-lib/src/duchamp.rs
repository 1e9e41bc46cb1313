//! Flash plans for the "duchamp" device.
//!
//! The sequence is authoritative: activate slot A, flash all partitions in
//! table order, then (full wipe only) erase the designated wipe partitions
//! and issue the vendor OEM command, and finally reboot.

use crate::plan::{FlashPlan, FlashStep, PlanVariant};

/// Product identifier the bootloader reports via `getvar product`.
pub const PRODUCT: &str = "duchamp";

/// Slot activated before any image is written.
const SLOT: &str = "a";

/// `(partition, image file)` in flash order.
const IMAGE_TABLE: &[(&str, &str)] = &[
    ("preloader_a", "preloader_duchamp.bin"),
    ("preloader_b", "preloader_duchamp.bin"),
    ("vbmeta_a", "vbmeta.img"),
    ("vbmeta_system_a", "vbmeta_system.img"),
    ("vbmeta_vendor_a", "vbmeta_vendor.img"),
    ("md1img_a", "md1img.img"),
    ("spmfw_a", "spmfw.img"),
    ("scp_a", "scp.img"),
    ("sspm_a", "sspm.img"),
    ("mcupm_a", "mcupm.img"),
    ("dpm_a", "dpm.img"),
    ("gz_a", "gz.img"),
    ("tee_a", "tee.img"),
    ("lk_a", "lk.img"),
    ("logo_a", "logo.bin"),
    ("dtbo_a", "dtbo.img"),
    ("vendor_boot_a", "vendor_boot.img"),
    ("init_boot_a", "init_boot.img"),
    ("boot_a", "boot.img"),
    ("super", "super.img"),
];

/// Partitions wiped by the full-wipe variant, after all images are written.
const WIPE_TABLE: &[&str] = &["metadata", "userdata", "expdb", "frp"];

const OEM_ARGS: &[&str] = &["cdms"];

/// Build the plan for `variant`. Both variants share the image table; the
/// full wipe appends the erases and the vendor OEM command before reboot.
pub fn plan(variant: PlanVariant) -> FlashPlan {
    let mut steps = vec![FlashStep::SetActive { slot: SLOT }];
    steps.extend(
        IMAGE_TABLE
            .iter()
            .map(|&(partition, image)| FlashStep::Flash { partition, image }),
    );
    if variant == PlanVariant::FullWipe {
        steps.extend(
            WIPE_TABLE
                .iter()
                .map(|&partition| FlashStep::Erase { partition }),
        );
        steps.push(FlashStep::Oem { args: OEM_ARGS });
    }
    steps.push(FlashStep::Reboot);

    FlashPlan {
        name: match variant {
            PlanVariant::FullWipe => "duchamp full wipe",
            PlanVariant::Dirty => "duchamp dirty flash",
        },
        steps,
    }
}

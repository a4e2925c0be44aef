//! Prebuilt frames for common requests.
//!
//! Discovery helpers only build the frames; no branch search or mute
//! bookkeeping happens here.

use super::error::RdmError;
use super::frame::{CommandClass, RdmCommand, build_frame};
use super::layout;
use super::pid;
use super::uid::{DeviceUid, discovery_range};

fn root_command(
    destination: DeviceUid,
    source: DeviceUid,
    transaction_number: u8,
    port_id: u8,
    command_class: CommandClass,
    parameter_id: u16,
    parameter_data: &[u8],
) -> Result<Vec<u8>, RdmError> {
    build_frame(&RdmCommand {
        destination,
        source,
        transaction_number,
        port_id,
        message_count: 0,
        sub_device: layout::SUB_DEVICE_ROOT,
        command_class,
        parameter_id,
        parameter_data,
    })
}

/// GET COMMS_STATUS addressed to the root device.
pub fn get_comms_status(
    destination: DeviceUid,
    source: DeviceUid,
    transaction_number: u8,
    port_id: u8,
) -> Result<Vec<u8>, RdmError> {
    root_command(
        destination,
        source,
        transaction_number,
        port_id,
        CommandClass::Get,
        pid::COMMS_STATUS,
        &[],
    )
}

/// GET SUPPORTED_PARAMETERS addressed to `sub_device` (`layout::SUB_DEVICE_ROOT`
/// for the root device).
pub fn get_supported_parameters(
    destination: DeviceUid,
    source: DeviceUid,
    transaction_number: u8,
    port_id: u8,
    sub_device: u16,
) -> Result<Vec<u8>, RdmError> {
    build_frame(&RdmCommand {
        destination,
        source,
        transaction_number,
        port_id,
        message_count: 0,
        sub_device,
        command_class: CommandClass::Get,
        parameter_id: pid::SUPPORTED_PARAMETERS,
        parameter_data: &[],
    })
}

/// DISC_UNIQUE_BRANCH over `[lower, upper]`, broadcast to all devices.
pub fn disc_unique_branch(
    source: DeviceUid,
    transaction_number: u8,
    port_id: u8,
    lower: DeviceUid,
    upper: DeviceUid,
) -> Result<Vec<u8>, RdmError> {
    root_command(
        DeviceUid::broadcast_all(),
        source,
        transaction_number,
        port_id,
        CommandClass::Discovery,
        pid::DISC_UNIQUE_BRANCH,
        &discovery_range(lower, upper),
    )
}

pub fn disc_mute(
    destination: DeviceUid,
    source: DeviceUid,
    transaction_number: u8,
    port_id: u8,
) -> Result<Vec<u8>, RdmError> {
    root_command(
        destination,
        source,
        transaction_number,
        port_id,
        CommandClass::Discovery,
        pid::DISC_MUTE,
        &[],
    )
}

pub fn disc_un_mute(
    destination: DeviceUid,
    source: DeviceUid,
    transaction_number: u8,
    port_id: u8,
) -> Result<Vec<u8>, RdmError> {
    root_command(
        destination,
        source,
        transaction_number,
        port_id,
        CommandClass::Discovery,
        pid::DISC_UN_MUTE,
        &[],
    )
}

//! Centralized icon definitions.
//!
//! Maps semantic icon names and file-kind [`IconKey`]s to Bootstrap icons.

use driveview_core::IconKey;
use icondata::Icon;

pub use icondata::{
    BsArrowClockwise as REFRESH, BsBoxArrowUpRight as EXTERNAL_LINK, BsCloud as DRIVE,
    BsExclamationTriangle as WARNING, BsGear as SETTINGS, BsGrid as GRID, BsHouseFill as HOME,
    BsListUl as LIST, BsSearch as SEARCH, BsXLg as CLOSE,
};

/// Icon for a file kind.
pub fn icon_for(key: IconKey) -> Icon {
    match key {
        IconKey::Folder => icondata::BsFolderFill,
        IconKey::Pdf => icondata::BsFileEarmarkPdf,
        IconKey::Document => icondata::BsFileEarmarkWord,
        IconKey::Text => icondata::BsFileEarmarkText,
        IconKey::Image => icondata::BsFileEarmarkImage,
        IconKey::Video => icondata::BsFileEarmarkPlay,
        IconKey::Audio => icondata::BsFileEarmarkMusic,
        IconKey::Archive => icondata::BsFileEarmarkZip,
        IconKey::Script | IconKey::Style => icondata::BsFileEarmarkCode,
        IconKey::Web => icondata::BsGlobe,
        IconKey::Data => icondata::BsFileEarmarkSpreadsheet,
        IconKey::File => icondata::BsFileEarmark,
    }
}

pub const APP_TITLE: &str = "TICKET SCOUT";
pub const LABEL_URL: &str = "Event URL";
pub const LABEL_CODE: &str = "Access code";
pub const PLACEHOLDER_URL: &str = "Enter a Ticketmaster URL";
pub const PLACEHOLDER_CODE: &str = "Enter an access code";
pub const BUTTON_SUBMIT: &str = "GET DATA";
pub const BUTTON_LOADING: &str = "LOADING...";
pub const HINT_URL_INVALID: &str = "not a vendor event URL";
pub const HINT_CODE_MISSING: &str = "access code is required";
pub const HINT_CLOSE: &str = "Press Enter to close";

pub const HEADING_EVENT: &str = "Event:";
pub const HEADING_HELD_ON: &str = "Held on:";
pub const HEADING_LOCATION: &str = "Location:";
pub const HEADING_COUNTS: &str = "Available sections & rows:";
pub const HEADING_RECOMMENDATIONS: &str = "Recommended picks:";
pub const HEADING_ROWS: &str = "All sections, rows and prices:";

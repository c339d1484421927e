pub(crate) mod logging;
pub(crate) mod search;
pub(crate) mod timezone;

pub(crate) use search::run_helper;
pub(crate) use timezone::Timezone;

mod newsletters;
mod recipients;
mod schedules;

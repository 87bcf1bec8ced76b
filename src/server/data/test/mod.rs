mod court;
mod lesson;
mod reservation;
mod team;
mod user;

pub mod applicationdtos;
pub mod jobdtos;
pub mod userdtos;
pub mod workerdtos;

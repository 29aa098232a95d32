pub mod applicationmodel;
pub mod jobmodel;
pub mod usermodel;
pub mod workermodel;

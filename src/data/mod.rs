pub mod view;

#[cfg(test)]
mod test;

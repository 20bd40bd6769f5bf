mod binding;
mod capture;

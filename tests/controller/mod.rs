mod continent;
mod country;
mod favourite;
mod visited;

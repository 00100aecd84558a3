mod cmp;
mod div;
mod factorial;
mod modular;
mod mul;
mod primitives;
mod shift;
mod sum;

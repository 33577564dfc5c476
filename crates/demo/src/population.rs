//! Estimated population per year, newest first.

use serde::Serialize;

use valuekit_core::ValueObject;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Population {
    pub year: i32,
    pub count: u64,
}

impl Population {
    pub const fn new(year: i32, count: u64) -> Self {
        Self { year, count }
    }
}

impl ValueObject for Population {}

pub const ESTIMATED_POPULATION: &[Population] = &[
    Population::new(2022, 19_031_335),
    Population::new(2021, 19_127_774),
    Population::new(2020, 19_237_691),
    Population::new(2019, 19_364_557),
    Population::new(2018, 19_506_114),
    Population::new(2017, 19_653_969),
    Population::new(2016, 19_796_285),
    Population::new(2015, 19_925_175),
    Population::new(2014, 20_035_930),
    Population::new(2013, 20_132_776),
    Population::new(2012, 20_227_469),
    Population::new(2011, 20_336_718),
    Population::new(2010, 20_471_864),
    Population::new(2009, 20_637_991),
    Population::new(2008, 20_829_517),
    Population::new(2007, 21_034_189),
    Population::new(2006, 21_234_305),
    Population::new(2005, 21_417_291),
    Population::new(2004, 21_577_885),
    Population::new(2003, 21_720_407),
    Population::new(2002, 21_853_273),
    Population::new(2001, 21_989_350),
    Population::new(2000, 22_137_419),
    Population::new(1999, 22_298_125),
    Population::new(1998, 22_466_286),
    Population::new(1997, 22_637_604),
    Population::new(1996, 22_805_703),
    Population::new(1995, 22_964_754),
    Population::new(1994, 23_115_811),
    Population::new(1993, 23_256_956),
    Population::new(1992, 23_375_822),
    Population::new(1991, 23_456_644),
    Population::new(1990, 23_489_160),
    Population::new(1989, 23_466_407),
    Population::new(1988, 23_393_730),
    Population::new(1987, 23_288_400),
    Population::new(1986, 23_175_058),
    Population::new(1985, 23_071_274),
    Population::new(1984, 22_983_968),
    Population::new(1983, 22_907_302),
    Population::new(1982, 22_830_554),
    Population::new(1981, 22_737_209),
    Population::new(1980, 22_615_639),
    Population::new(1979, 22_463_308),
    Population::new(1978, 22_285_507),
    Population::new(1977, 22_087_896),
    Population::new(1976, 21_879_086),
    Population::new(1975, 21_665_643),
    Population::new(1974, 21_450_410),
    Population::new(1973, 21_232_621),
    Population::new(1972, 21_011_137),
    Population::new(1971, 20_783_546),
    Population::new(1970, 20_548_911),
    Population::new(1969, 20_305_354),
    Population::new(1968, 20_055_971),
    Population::new(1967, 19_810_615),
    Population::new(1966, 19_582_335),
    Population::new(1965, 19_379_568),
    Population::new(1964, 19_207_135),
    Population::new(1963, 19_059_938),
    Population::new(1962, 18_924_157),
    Population::new(1961, 18_780_202),
    Population::new(1960, 18_613_939),
    Population::new(1959, 18_420_454),
    Population::new(1958, 18_202_712),
    Population::new(1957, 17_968_466),
    Population::new(1956, 17_726_631),
    Population::new(1955, 17_483_935),
    Population::new(1954, 17_243_818),
    Population::new(1953, 17_005_717),
    Population::new(1952, 16_764_904),
    Population::new(1951, 16_512_664),
    Population::new(1950, 16_236_296),
];

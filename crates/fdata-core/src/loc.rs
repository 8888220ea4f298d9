//! Raw FDATA slot locations, exactly as published in `fdatap.h`.
//!
//! These offsets are format-compatibility constants: any deviation breaks
//! interoperability with existing NMRPipe-format files. They are crate
//! internal; the public API addresses the header through [`crate::param`]
//! identifiers, never through bare indices.

// ─── General parameter locations ────────────────────────────────────────────

pub(crate) const FDMAGIC: usize = 0;
pub(crate) const FDFLTFORMAT: usize = 1;
pub(crate) const FDFLTORDER: usize = 2;
pub(crate) const FDID: usize = 3;

pub(crate) const FDSIZE: usize = 99;
pub(crate) const FDREALSIZE: usize = 97;
pub(crate) const FDSPECNUM: usize = 219;
pub(crate) const FDQUADFLAG: usize = 106;
pub(crate) const FD2DPHASE: usize = 256;

// ─── Dimension count and order ──────────────────────────────────────────────

pub(crate) const FDTRANSPOSED: usize = 221;
pub(crate) const FDDIMCOUNT: usize = 9;
pub(crate) const FDDIMORDER: usize = 24;
pub(crate) const FDDIMORDER1: usize = 24;
pub(crate) const FDDIMORDER2: usize = 25;
pub(crate) const FDDIMORDER3: usize = 26;
pub(crate) const FDDIMORDER4: usize = 27;

pub(crate) const FDNUSDIM: usize = 45;

// ─── Pipeline / stream parameters ───────────────────────────────────────────

pub(crate) const FDPIPEFLAG: usize = 57;
pub(crate) const FDCUBEFLAG: usize = 447;
pub(crate) const FDPIPECOUNT: usize = 75;
pub(crate) const FDSLICECOUNT0: usize = 443;
pub(crate) const FDSLICECOUNT1: usize = 446;
pub(crate) const FDFILECOUNT: usize = 442;

pub(crate) const FDTHREADCOUNT: usize = 444;
pub(crate) const FDTHREADID: usize = 445;

pub(crate) const FDFIRSTPLANE: usize = 77;
pub(crate) const FDLASTPLANE: usize = 78;
pub(crate) const FDPARTITION: usize = 65;

pub(crate) const FDPLANELOC: usize = 14;

// ─── Min/max and display thresholds ─────────────────────────────────────────

pub(crate) const FDMAX: usize = 247;
pub(crate) const FDMIN: usize = 248;
pub(crate) const FDSCALEFLAG: usize = 250;
pub(crate) const FDDISPMAX: usize = 251;
pub(crate) const FDDISPMIN: usize = 252;
pub(crate) const FDPTHRESH: usize = 253;
pub(crate) const FDNTHRESH: usize = 254;

// ─── User-reserved slots ────────────────────────────────────────────────────

pub(crate) const FDUSER1: usize = 70;
pub(crate) const FDUSER2: usize = 71;
pub(crate) const FDUSER3: usize = 72;
pub(crate) const FDUSER4: usize = 73;
pub(crate) const FDUSER5: usize = 74;
pub(crate) const FDUSER6: usize = 76;

// ─── Footer block locations ─────────────────────────────────────────────────

pub(crate) const FDLASTBLOCK: usize = 359;
pub(crate) const FDCONTBLOCK: usize = 360;
pub(crate) const FDBASEBLOCK: usize = 361;
pub(crate) const FDPEAKBLOCK: usize = 362;
pub(crate) const FDBMAPBLOCK: usize = 363;
pub(crate) const FDHISTBLOCK: usize = 364;
pub(crate) const FD1DBLOCK: usize = 365;

// ─── Conversion date/time ───────────────────────────────────────────────────

pub(crate) const FDMONTH: usize = 294;
pub(crate) const FDDAY: usize = 295;
pub(crate) const FDYEAR: usize = 296;
pub(crate) const FDHOURS: usize = 283;
pub(crate) const FDMINS: usize = 284;
pub(crate) const FDSECS: usize = 285;

// ─── Miscellaneous ──────────────────────────────────────────────────────────

pub(crate) const FDMCFLAG: usize = 135;
pub(crate) const FDNOISE: usize = 153;
pub(crate) const FDRANK: usize = 180;
pub(crate) const FDTEMPERATURE: usize = 157;
pub(crate) const FDPRESSURE: usize = 158;
pub(crate) const FD2DVIRGIN: usize = 399;
pub(crate) const FDTAU: usize = 199;
pub(crate) const FDDOMINFO: usize = 266;
pub(crate) const FDMETHINFO: usize = 267;

pub(crate) const FDSCORE: usize = 370;
pub(crate) const FDSCANS: usize = 371;
pub(crate) const FDSCALE: usize = 478;

// ─── DMX (digital oversampling) ─────────────────────────────────────────────

pub(crate) const FDDMXVAL: usize = 40;
pub(crate) const FDDMXFLAG: usize = 41;
pub(crate) const FDDELTATR: usize = 42;

// ─── Packed text regions ────────────────────────────────────────────────────

pub(crate) const FDSRCNAME: usize = 286;
pub(crate) const FDUSERNAME: usize = 290;
pub(crate) const FDOPERNAME: usize = 464;
pub(crate) const FDTITLE: usize = 297;
pub(crate) const FDCOMMENT: usize = 312;

pub(crate) const SIZE_LABEL: usize = 8;
pub(crate) const SIZE_SRCNAME: usize = 16;
pub(crate) const SIZE_USERNAME: usize = 16;
pub(crate) const SIZE_OPERNAME: usize = 32;
pub(crate) const SIZE_TITLE: usize = 60;
pub(crate) const SIZE_COMMENT: usize = 160;

// ─── F1 family (first indirect dimension) ───────────────────────────────────

pub(crate) const FDF1LABEL: usize = 18;
pub(crate) const FDF1APOD: usize = 428;
pub(crate) const FDF1SW: usize = 229;
pub(crate) const FDF1OBS: usize = 218;
pub(crate) const FDF1OBSMID: usize = 379;
pub(crate) const FDF1ORIG: usize = 249;
pub(crate) const FDF1UNITS: usize = 234;
pub(crate) const FDF1FTFLAG: usize = 222;
pub(crate) const FDF1AQSIGN: usize = 475;
pub(crate) const FDF1QUADFLAG: usize = 55;
pub(crate) const FDF1CAR: usize = 67;
pub(crate) const FDF1CENTER: usize = 80;
pub(crate) const FDF1OFFPPM: usize = 481;
pub(crate) const FDF1P0: usize = 245;
pub(crate) const FDF1P1: usize = 246;
pub(crate) const FDF1APODCODE: usize = 414;
pub(crate) const FDF1APODQ1: usize = 420;
pub(crate) const FDF1APODQ2: usize = 421;
pub(crate) const FDF1APODQ3: usize = 422;
pub(crate) const FDF1LB: usize = 243;
pub(crate) const FDF1GB: usize = 375;
pub(crate) const FDF1GOFF: usize = 383;
pub(crate) const FDF1C1: usize = 423;
pub(crate) const FDF1ZF: usize = 437;
pub(crate) const FDF1X1: usize = 259;
pub(crate) const FDF1XN: usize = 260;
pub(crate) const FDF1FTSIZE: usize = 98;
pub(crate) const FDF1TDSIZE: usize = 387;

// ─── F2 family (directly detected dimension) ────────────────────────────────

pub(crate) const FDF2LABEL: usize = 16;
pub(crate) const FDF2APOD: usize = 95;
pub(crate) const FDF2SW: usize = 100;
pub(crate) const FDF2OBS: usize = 119;
pub(crate) const FDF2OBSMID: usize = 378;
pub(crate) const FDF2ORIG: usize = 101;
pub(crate) const FDF2UNITS: usize = 152;
pub(crate) const FDF2QUADFLAG: usize = 56;
pub(crate) const FDF2FTFLAG: usize = 220;
pub(crate) const FDF2AQSIGN: usize = 64;
pub(crate) const FDF2CAR: usize = 66;
pub(crate) const FDF2CENTER: usize = 79;
pub(crate) const FDF2OFFPPM: usize = 480;
pub(crate) const FDF2P0: usize = 109;
pub(crate) const FDF2P1: usize = 110;
pub(crate) const FDF2APODCODE: usize = 413;
pub(crate) const FDF2APODQ1: usize = 415;
pub(crate) const FDF2APODQ2: usize = 416;
pub(crate) const FDF2APODQ3: usize = 417;
pub(crate) const FDF2LB: usize = 111;
pub(crate) const FDF2GB: usize = 374;
pub(crate) const FDF2GOFF: usize = 382;
pub(crate) const FDF2C1: usize = 418;
pub(crate) const FDF2APODDF: usize = 419;
pub(crate) const FDF2ZF: usize = 108;
pub(crate) const FDF2X1: usize = 257;
pub(crate) const FDF2XN: usize = 258;
pub(crate) const FDF2FTSIZE: usize = 96;
pub(crate) const FDF2TDSIZE: usize = 386;

// ─── F3 family ──────────────────────────────────────────────────────────────

pub(crate) const FDF3LABEL: usize = 20;
pub(crate) const FDF3APOD: usize = 50;
pub(crate) const FDF3OBS: usize = 10;
pub(crate) const FDF3OBSMID: usize = 380;
pub(crate) const FDF3SW: usize = 11;
pub(crate) const FDF3ORIG: usize = 12;
pub(crate) const FDF3FTFLAG: usize = 13;
pub(crate) const FDF3AQSIGN: usize = 476;
pub(crate) const FDF3SIZE: usize = 15;
pub(crate) const FDF3QUADFLAG: usize = 51;
pub(crate) const FDF3UNITS: usize = 58;
pub(crate) const FDF3P0: usize = 60;
pub(crate) const FDF3P1: usize = 61;
pub(crate) const FDF3CAR: usize = 68;
pub(crate) const FDF3CENTER: usize = 81;
pub(crate) const FDF3OFFPPM: usize = 482;
pub(crate) const FDF3APODCODE: usize = 400;
pub(crate) const FDF3APODQ1: usize = 401;
pub(crate) const FDF3APODQ2: usize = 402;
pub(crate) const FDF3APODQ3: usize = 403;
pub(crate) const FDF3LB: usize = 372;
pub(crate) const FDF3GB: usize = 376;
pub(crate) const FDF3GOFF: usize = 384;
pub(crate) const FDF3C1: usize = 404;
pub(crate) const FDF3ZF: usize = 438;
pub(crate) const FDF3X1: usize = 261;
pub(crate) const FDF3XN: usize = 262;
pub(crate) const FDF3FTSIZE: usize = 200;
pub(crate) const FDF3TDSIZE: usize = 388;

// ─── F4 family ──────────────────────────────────────────────────────────────

pub(crate) const FDF4LABEL: usize = 22;
pub(crate) const FDF4APOD: usize = 53;
pub(crate) const FDF4OBS: usize = 28;
pub(crate) const FDF4OBSMID: usize = 381;
pub(crate) const FDF4SW: usize = 29;
pub(crate) const FDF4ORIG: usize = 30;
pub(crate) const FDF4FTFLAG: usize = 31;
pub(crate) const FDF4AQSIGN: usize = 477;
pub(crate) const FDF4SIZE: usize = 32;
pub(crate) const FDF4QUADFLAG: usize = 54;
pub(crate) const FDF4UNITS: usize = 59;
pub(crate) const FDF4P0: usize = 62;
pub(crate) const FDF4P1: usize = 63;
pub(crate) const FDF4CAR: usize = 69;
pub(crate) const FDF4CENTER: usize = 82;
pub(crate) const FDF4OFFPPM: usize = 483;
pub(crate) const FDF4APODCODE: usize = 405;
pub(crate) const FDF4APODQ1: usize = 406;
pub(crate) const FDF4APODQ2: usize = 407;
pub(crate) const FDF4APODQ3: usize = 408;
pub(crate) const FDF4LB: usize = 373;
pub(crate) const FDF4GB: usize = 377;
pub(crate) const FDF4GOFF: usize = 385;
pub(crate) const FDF4C1: usize = 409;
pub(crate) const FDF4ZF: usize = 439;
pub(crate) const FDF4X1: usize = 263;
pub(crate) const FDF4XN: usize = 264;
pub(crate) const FDF4FTSIZE: usize = 201;
pub(crate) const FDF4TDSIZE: usize = 389;

/*!
# `GOSUB <line number>`

## Purpose
Call a subroutine.

## Remarks
The position after `GOSUB` is saved and execution moves to the line.
`RETURN` continues with the statement following the `GOSUB`, even
in the middle of a line. Calls nest up to 65535 deep.

## Example
```text
10 X=3:GOSUB 100:X=4:GOSUB 100
20 END
100 PRINT X;"SQUARED IS";X*X
110 RETURN
RUN
3 SQUARED IS 9
4 SQUARED IS 16
```

*/
